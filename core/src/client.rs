//! Request dispatcher for the NewsAPI endpoints.
//!
//! # Design
//! `NewsApiClient` holds the API key, the base URL and an injected
//! [`HttpTransport`] — nothing else, so calls are independent and the client
//! can be shared across threads whenever the transport can. Each call checks
//! the endpoint against the allow-list, delegates query construction to
//! [`Config::encode`], builds a fresh header list, and executes one GET.
//!
//! Status codes are not interpreted: a 4xx/5xx response is a successful call
//! whose body carries the API's own error envelope for the caller to decode.

use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};

/// Endpoints the API serves. Any other name is rejected before validation.
pub const ENDPOINTS: [&str; 4] = [
    "everything",
    "top-headlines",
    "top-headlines/sources",
    "sources",
];

/// Production base URL.
pub const BASE_URL: &str = "https://newsapi.org/v2";

const API_KEY_HEADER: &str = "X-Api-Key";

/// Synchronous client for the NewsAPI HTTP API.
///
/// The API key is stored verbatim at construction and immutable for the
/// client's lifetime; its shape is not validated.
#[derive(Debug, Clone)]
pub struct NewsApiClient<T = UreqTransport> {
    api_key: String,
    base_url: String,
    transport: T,
}

impl NewsApiClient<UreqTransport> {
    /// Client against the production API with the default blocking transport.
    pub fn new(api_key: &str) -> Self {
        Self::with_transport(api_key, BASE_URL, UreqTransport::new())
    }
}

impl<T: HttpTransport> NewsApiClient<T> {
    /// Client with an explicit base URL and transport. Used by the
    /// integration tests against the mock server; also the hook for
    /// self-hosted gateways.
    pub fn with_transport(api_key: &str, base_url: &str, transport: T) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Issue a GET against one of the allow-listed endpoints.
    ///
    /// The query string comes from [`Config::encode`] and its error is
    /// propagated unchanged; no request is sent for an invalid configuration
    /// or an unknown endpoint. The `?` separator is always present, even
    /// when the query string is empty.
    ///
    /// Ownership of the response body stream passes to the caller — read or
    /// drop it to release the connection.
    pub fn get(&self, endpoint: &str, config: &Config) -> Result<HttpResponse, ApiError> {
        if !ENDPOINTS.contains(&endpoint) {
            return Err(ApiError::UnknownEndpoint(endpoint.to_string()));
        }
        let query = config.encode()?;
        let url = format!("{}/{}?{}", self.base_url, endpoint, query);
        debug!(endpoint, url = %url, "dispatching GET");

        let request = HttpRequest {
            url,
            headers: vec![
                (API_KEY_HEADER.to_string(), self.api_key.clone()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
        };
        self.transport.execute(&request)
    }
}
