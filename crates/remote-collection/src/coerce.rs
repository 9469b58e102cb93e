//! Draft Coercion
//!
//! Conversions between raw form text and wire values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Calendar-date format used by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A draft that cannot become a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("At least one {0} is required")]
    EmptyList(&'static str),

    #[error("{field} is not a valid date: {value}")]
    InvalidDate { field: &'static str, value: String },
}

/// Split comma-separated text: items trimmed, blanks dropped, order kept
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`split_list`] for pre-filling a text field
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Normalize a server date or timestamp to `YYYY-MM-DD` in UTC.
///
/// Unrecognized input yields an empty string.
pub fn calendar_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return stamp.with_timezone(&Utc).format(DATE_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DATE_FORMAT).to_string();
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => date.format(DATE_FORMAT).to_string(),
        Err(_) => String::new(),
    }
}

/// [`calendar_date`] for optional fields
pub fn optional_calendar_date(raw: Option<&str>) -> String {
    raw.map(calendar_date).unwrap_or_default()
}

/// Parse date text into UTC midnight; blank text means "omit"
pub fn parse_date(field: &'static str, text: &str) -> Result<Option<DateTime<Utc>>, DraftError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| DraftError::InvalidDate {
        field,
        value: text.to_string(),
    })?;
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    Ok(Some(Utc.from_utc_datetime(&midnight)))
}
