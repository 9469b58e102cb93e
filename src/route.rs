//! Routes
//!
//! Route table for the navigation shell, and History API glue.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use remote_collection::RecordId;
use wasm_bindgen::JsValue;

/// Every view the console can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CustomerList,
    CustomerForm(Option<RecordId>),
    OrderList,
    OrderForm(Option<RecordId>),
    NotFound(String),
}

/// Top-level section, for highlighting the active nav link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Customers,
    Orders,
}

impl Route {
    /// Parse a location pathname; `/` is the customers list
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["customers"] => Route::CustomerList,
            ["customers", "new"] => Route::CustomerForm(None),
            ["customers", "edit", id] => Route::CustomerForm(Some(decode_id(id))),
            ["orders"] => Route::OrderList,
            ["orders", "new"] => Route::OrderForm(None),
            ["orders", "edit", id] => Route::OrderForm(Some(decode_id(id))),
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::CustomerList => "/customers".to_string(),
            Route::CustomerForm(None) => "/customers/new".to_string(),
            Route::CustomerForm(Some(id)) => format!("/customers/edit/{}", encode_id(id)),
            Route::OrderList => "/orders".to_string(),
            Route::OrderForm(None) => "/orders/new".to_string(),
            Route::OrderForm(Some(id)) => format!("/orders/edit/{}", encode_id(id)),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Route::CustomerList | Route::CustomerForm(_) => Some(Section::Customers),
            Route::OrderList | Route::OrderForm(_) => Some(Section::Orders),
            Route::NotFound(_) => None,
        }
    }
}

fn decode_id(segment: &str) -> RecordId {
    RecordId::from(percent_decode_str(segment).decode_utf8_lossy().into_owned())
}

fn encode_id(id: &RecordId) -> String {
    utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC).to_string()
}

// ========================
// Browser History
// ========================

/// Route for the current `window.location`
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::parse(&path)
}

/// Push `route` onto the session history without reloading the page
pub fn push_history(route: &Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
        tracing::warn!(path = %route.path(), error = ?err, "history push failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_table() {
        assert_eq!(Route::parse("/"), Route::CustomerList);
        assert_eq!(Route::parse(""), Route::CustomerList);
        assert_eq!(Route::parse("/customers"), Route::CustomerList);
        assert_eq!(Route::parse("/customers/"), Route::CustomerList);
        assert_eq!(Route::parse("/customers/new"), Route::CustomerForm(None));
        assert_eq!(
            Route::parse("/customers/edit/12"),
            Route::CustomerForm(Some(RecordId::from("12")))
        );
        assert_eq!(Route::parse("/orders"), Route::OrderList);
        assert_eq!(Route::parse("/orders/new"), Route::OrderForm(None));
        assert_eq!(
            Route::parse("/orders/edit/6f1c-22"),
            Route::OrderForm(Some(RecordId::from("6f1c-22")))
        );
        assert_eq!(
            Route::parse("/menu"),
            Route::NotFound("/menu".to_string())
        );
        assert_eq!(
            Route::parse("/orders/edit"),
            Route::NotFound("/orders/edit".to_string())
        );
    }

    #[test]
    fn test_path_round_trips_opaque_ids() {
        let route = Route::CustomerForm(Some(RecordId::from("a b/c")));
        assert_eq!(route.path(), "/customers/edit/a%20b%2Fc");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn test_sections() {
        assert_eq!(Route::CustomerForm(None).section(), Some(Section::Customers));
        assert_eq!(Route::OrderList.section(), Some(Section::Orders));
        assert_eq!(Route::NotFound("/x".into()).section(), None);
    }
}
