// =============================================================================
// GS-IT Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. API Client
// 4. Error Types
// =============================================================================

pub mod contact;

pub use contact::*;

use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use thiserror::Error;

// -----------------------------------------------------------------------------
// 4. Error Types
// -----------------------------------------------------------------------------

/// API error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Rejected by server: {0}")]
    Rejected(String),
}

// -----------------------------------------------------------------------------
// 3. API Client
// -----------------------------------------------------------------------------

/// Status and body of a completed request, before interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for API requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client. An empty base URL targets the page origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute (or origin-relative) URL for an endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Build a POST request with common headers.
    fn post_request(&self, endpoint: &str) -> RequestBuilder {
        Request::post(&self.url(endpoint)).header("Accept", "application/json")
    }

    /// POST a JSON body and hand back the raw status/body.
    ///
    /// Transport failures map to [`ApiError::Network`]; HTTP error statuses
    /// are returned as-is for the caller to interpret.
    pub async fn post_json<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<RawResponse, ApiError> {
        let response = self
            .post_request(endpoint)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = body_or_empty(endpoint, response.text().await);

        Ok(RawResponse { status, body })
    }
}

/// An unreadable body is treated as empty; the read error is logged.
fn body_or_empty<E: std::fmt::Display>(endpoint: &str, body: Result<String, E>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Failed to read response body from {}: {}", endpoint, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_endpoint() {
        assert_eq!(ApiClient::new("").url("/api/contact"), "/api/contact");
        assert_eq!(
            ApiClient::new("https://api.gs-it.ae/").url("/api/contact"),
            "https://api.gs-it.ae/api/contact"
        );
    }

    #[test]
    fn test_unreadable_body_becomes_empty() {
        assert_eq!(body_or_empty::<String>("/api/contact", Ok("{}".to_string())), "{}");
        assert_eq!(
            body_or_empty("/api/contact", Err("stream closed".to_string())),
            ""
        );
    }

    #[test]
    fn test_raw_response_success_range() {
        let ok = RawResponse { status: 204, body: String::new() };
        let redirect = RawResponse { status: 302, body: String::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }
}
