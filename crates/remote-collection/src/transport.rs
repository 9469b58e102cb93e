//! Transport
//!
//! The single network seam. Everything above it is plain, testable Rust.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::error::{SyncError, SyncResult};

/// One outgoing request, addressed relative to the API origin
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path without leading slash, e.g. `customers/7`
    pub path: String,
    /// JSON body; sent with `Content-Type: application/json`
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response: status plus the body text, decoded later
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the remote API.
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Send a request. Only failures to get any response are errors here;
    /// non-success statuses come back as a normal [`ApiResponse`].
    async fn send(&self, request: ApiRequest) -> SyncResult<ApiResponse>;
}

/// `reqwest`-backed transport against a fixed origin
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> SyncResult<ApiResponse> {
        let url = self.url_for(&request.path);
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = self.client.request(request.method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transport = HttpTransport::new("http://localhost:3000/");
        assert_eq!(transport.url_for("customers/7"), "http://localhost:3000/customers/7");
        assert_eq!(transport.url_for("/orders"), "http://localhost:3000/orders");
    }

    #[test]
    fn test_success_range() {
        let ok = |status| ApiResponse { status, body: String::new() }.is_success();
        assert!(ok(200));
        assert!(ok(204));
        assert!(!ok(304));
        assert!(!ok(400));
    }
}
