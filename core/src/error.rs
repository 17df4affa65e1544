//! Error types for the NewsAPI client.
//!
//! # Design
//! Every validation failure gets its own variant because callers branch on
//! *which* parameter was rejected (prompt for a corrected value, drop the
//! field, abort). `Transport` carries whatever the underlying HTTP layer
//! reported, unchanged — DNS, connection and TLS failures all land there.
//! A non-2xx HTTP status is not an error at this layer; it comes back as a
//! normal [`HttpResponse`](crate::http::HttpResponse).

use thiserror::Error;

/// Errors returned by [`Config::encode`](crate::Config::encode) and
/// [`NewsApiClient::get`](crate::NewsApiClient::get).
///
/// Validation stops at the first violated constraint in the fixed field-check
/// order, so at most one variant is ever produced per call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The free-text search query exceeded 500 characters.
    #[error("query parameter 'q' exceeded max length of 500 characters")]
    QueryTooLong,

    /// Every `search_in` entry was unrecognized, leaving nothing to send.
    #[error("unrecognized value in query parameter: 'searchIn'")]
    InvalidSearchIn,

    /// The language code is not in the supported set.
    #[error("unrecognized value in query parameter: 'language'")]
    InvalidLanguage,

    /// The country code is not in the supported set.
    #[error("unrecognized value in query parameter: 'country'")]
    InvalidCountry,

    /// The sort order is not one of relevancy, popularity, publishedAt.
    #[error("unrecognized value in query parameter: 'sortBy'")]
    InvalidSortBy,

    /// `page_size` exceeded the API maximum of 100.
    #[error("query parameter 'pageSize' exceeded max size of 100")]
    PageSizeTooLarge,

    /// The category is not in the supported set.
    #[error("unrecognized value in query parameter: 'category'")]
    InvalidCategory,

    /// The endpoint name is not one the API serves. Rejected before the
    /// configuration is validated and before any network I/O.
    #[error("unrecognized endpoint: '{0}'")]
    UnknownEndpoint(String),

    /// The transport failed to complete the request. Never retried here.
    #[error("transport failure: {0}")]
    Transport(String),
}
