//! Synchronous client library for the NewsAPI HTTP API.
//!
//! # Overview
//! Builds validated query strings for the four fixed endpoints, issues GET
//! requests with the API-key header attached, and returns the raw response —
//! status, headers, an unread body stream, and the resolved URL — for the
//! caller to decode.
//!
//! # Design
//! - `Config::encode` is the core: a pure function that validates every
//!   populated field in a fixed order and serializes the survivors into a
//!   deterministic, URL-encoded query string. The first violated constraint
//!   wins; nothing is accumulated.
//! - `NewsApiClient` is stateless beyond its API key, base URL and injected
//!   [`HttpTransport`]; each call is independent and blocking.
//! - Non-2xx statuses are normal returns. The API reports its own failures
//!   inside the JSON envelope ([`types`] has the shapes), so status handling
//!   belongs to the caller.
//! - The response body is an owned stream: read it or drop it to release the
//!   connection.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::{NewsApiClient, BASE_URL, ENDPOINTS};
pub use config::Config;
pub use error::ApiError;
pub use http::{Body, HttpRequest, HttpResponse, HttpTransport, UreqTransport};
pub use types::{Article, ArticleResponse, ArticleSource, SourceInfo, SourceResponse};
