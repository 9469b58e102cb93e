//! REST API Handles
//!
//! Typed endpoints for the `customers` and `orders` collections, sharing
//! one transport.

use std::sync::Arc;

use remote_collection::{Endpoint, HttpTransport, Transport};

use crate::config::AppConfig;
use crate::models::{Customer, Order};

pub const CUSTOMERS_PATH: &str = "customers";
pub const ORDERS_PATH: &str = "orders";

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// HTTP client rooted at the configured base URL
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(HttpTransport::new(&config.api_base_url)))
    }

    pub fn customers(&self) -> Endpoint<Customer> {
        Endpoint::new(Arc::clone(&self.transport), CUSTOMERS_PATH)
    }

    pub fn orders(&self) -> Endpoint<Order> {
        Endpoint::new(Arc::clone(&self.transport), ORDERS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let api = ApiClient::from_config(&AppConfig::default());
        assert_eq!(api.customers().path(), "customers");
        assert_eq!(api.orders().path(), "orders");
    }
}
