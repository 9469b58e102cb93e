//! Sync Errors
//!
//! Failure taxonomy for remote calls and the message rules for error bodies.

use serde_json::Value;
use thiserror::Error;

/// Result type for remote collection operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors surfaced by [`crate::Endpoint`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A success body did not decode as the expected record(s)
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The outgoing payload could not be serialized
    #[error("Invalid request body: {0}")]
    Encode(String),
}

impl SyncError {
    /// Build a status error from a failed response body
    pub fn from_status(status: u16, body: &str) -> Self {
        SyncError::Status {
            status,
            message: error_message(status, body),
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Human-readable message for a failed response.
///
/// A `message` list is joined with `"; "`, a `message` string is used as is,
/// anything else (no body, malformed JSON, no usable `message`) falls back to
/// the status code.
pub fn error_message(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(message_text));

    message.unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Array(parts) => {
            let parts: Vec<&str> = parts.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_list_is_joined() {
        let body = r#"{"message":["firstName must not be empty","email must be an email"],"statusCode":400}"#;
        assert_eq!(
            error_message(400, body),
            "firstName must not be empty; email must be an email"
        );
    }

    #[test]
    fn test_message_string_used_alone() {
        let body = r#"{"message":"Customer with ID 7 not found","error":"Not Found"}"#;
        assert_eq!(error_message(404, body), "Customer with ID 7 not found");
    }

    #[test]
    fn test_missing_message_falls_back_to_status() {
        assert_eq!(error_message(500, r#"{"error":"boom"}"#), "HTTP error! status: 500");
        assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "HTTP error! status: 502");
        assert_eq!(error_message(503, ""), "HTTP error! status: 503");
    }

    #[test]
    fn test_status_error_displays_bare_message() {
        let err = SyncError::from_status(400, r#"{"message":["firstName must not be empty"]}"#);
        assert_eq!(err.to_string(), "firstName must not be empty");
        assert_eq!(err.status(), Some(400));
        assert_eq!(SyncError::Network("offline".into()).status(), None);
    }
}
