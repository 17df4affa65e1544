//! Request configuration and the query-construction engine.
//!
//! # Design
//! `Config::encode` is a pure function from a configuration value to either a
//! canonical URL-encoded query string or the first violated constraint. No
//! I/O, no mutable state: the allow-list tables are process-wide constants,
//! and each call walks the fields in one fixed order so the output — and the
//! error reported when several fields are invalid at once — is deterministic.
//!
//! Unset is the zero value throughout (`""`, `vec![]`, `0`), so callers
//! populate only the fields they need:
//!
//! ```
//! use newsapi_core::Config;
//!
//! let config = Config {
//!     language: "sv".to_string(),
//!     country: "se".to_string(),
//!     ..Config::default()
//! };
//! assert_eq!(config.encode().unwrap(), "language=sv&country=se");
//! ```

use url::form_urlencoded;

use crate::error::ApiError;

/// Fields the free-text search can be restricted to.
pub const SEARCH_IN_OPTIONS: [&str; 3] = ["title", "description", "content"];

/// Headline categories the API recognizes.
pub const CATEGORY_OPTIONS: [&str; 7] = [
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

/// ISO-639-1 language codes the API recognizes.
pub const LANGUAGE_OPTIONS: [&str; 14] = [
    "ar", "de", "en", "es", "fr", "he", "it", "nl", "no", "pt", "ru", "sv", "ud", "zh",
];

/// Two-letter country codes the API recognizes.
pub const COUNTRY_OPTIONS: [&str; 54] = [
    "ae", "ar", "at", "au", "be", "bg", "br", "ca", "ch", "cn", "co", "cu", "cz", "de", "eg",
    "fr", "gb", "gr", "hk", "hu", "id", "ie", "il", "in", "it", "jp", "kr", "lt", "lv", "ma",
    "mx", "my", "ng", "nl", "no", "nz", "ph", "pl", "pt", "ro", "rs", "ru", "sa", "se", "sg",
    "si", "sk", "th", "tr", "tw", "ua", "us", "ve", "za",
];

/// Orderings accepted by the `everything` endpoint.
pub const SORT_OPTIONS: [&str; 3] = ["relevancy", "popularity", "publishedAt"];

const MAX_QUERY_LEN: usize = 500;
const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters for a single request.
///
/// One instance per call; [`encode`](Config::encode) never mutates it. Every
/// field is optional — an entirely empty configuration encodes to the empty
/// query string, and whether that is meaningful for a given endpoint is the
/// server's call, not the validator's.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Free-text search, at most 500 characters. Sent as `q`.
    pub query: String,
    /// Restricts the text search to specific article fields. Entries outside
    /// [`SEARCH_IN_OPTIONS`] are dropped; only an empty result is an error.
    pub search_in: Vec<String>,
    /// Source identifiers, sent comma-joined and unvalidated.
    pub sources: Vec<String>,
    /// Domains to include, sent comma-joined and unvalidated.
    pub domains: Vec<String>,
    /// Domains to exclude, sent comma-joined and unvalidated as
    /// `excludeDomains`.
    pub excluded_domains: Vec<String>,
    /// Oldest publication date, passed through verbatim.
    pub from: String,
    /// Newest publication date, passed through verbatim.
    pub to: String,
    /// One of [`LANGUAGE_OPTIONS`].
    pub language: String,
    /// One of [`COUNTRY_OPTIONS`].
    pub country: String,
    /// One of [`SORT_OPTIONS`]. Sent as `sortBy`.
    pub sort_by: String,
    /// Results per page, 1–100. Zero means unset. Sent as `pageSize`.
    pub page_size: u32,
    /// Page number, no upper bound. Zero means unset.
    pub page: u32,
    /// One of [`CATEGORY_OPTIONS`].
    pub category: String,
}

impl Config {
    /// Validate every populated field and serialize the configuration into a
    /// URL-encoded query string.
    ///
    /// Fields are checked in a fixed order (`query`, `search_in`, `sources`,
    /// `domains`, `excluded_domains`, `from`, `to`, `language`, `country`,
    /// `sort_by`, `page_size`, `page`, `category`); the first violated
    /// constraint is returned and nothing is accumulated. Parameters appear
    /// in the output in that same order.
    pub fn encode(&self) -> Result<String, ApiError> {
        let mut params = form_urlencoded::Serializer::new(String::new());

        if !self.query.is_empty() {
            if self.query.len() > MAX_QUERY_LEN {
                return Err(ApiError::QueryTooLong);
            }
            params.append_pair("q", &self.query);
        }
        if !self.search_in.is_empty() {
            // Unrecognized fields are dropped, not rejected; the error fires
            // only when nothing survives the filter.
            let recognized: Vec<&str> = self
                .search_in
                .iter()
                .map(String::as_str)
                .filter(|field| SEARCH_IN_OPTIONS.contains(field))
                .collect();
            if recognized.is_empty() {
                return Err(ApiError::InvalidSearchIn);
            }
            params.append_pair("searchIn", &recognized.join(","));
        }
        if !self.sources.is_empty() {
            params.append_pair("sources", &self.sources.join(","));
        }
        if !self.domains.is_empty() {
            params.append_pair("domains", &self.domains.join(","));
        }
        if !self.excluded_domains.is_empty() {
            params.append_pair("excludeDomains", &self.excluded_domains.join(","));
        }
        if !self.from.is_empty() {
            params.append_pair("from", &self.from);
        }
        if !self.to.is_empty() {
            params.append_pair("to", &self.to);
        }
        if !self.language.is_empty() {
            if !LANGUAGE_OPTIONS.contains(&self.language.as_str()) {
                return Err(ApiError::InvalidLanguage);
            }
            params.append_pair("language", &self.language);
        }
        if !self.country.is_empty() {
            if !COUNTRY_OPTIONS.contains(&self.country.as_str()) {
                return Err(ApiError::InvalidCountry);
            }
            params.append_pair("country", &self.country);
        }
        if !self.sort_by.is_empty() {
            if !SORT_OPTIONS.contains(&self.sort_by.as_str()) {
                return Err(ApiError::InvalidSortBy);
            }
            params.append_pair("sortBy", &self.sort_by);
        }
        if self.page_size != 0 {
            if self.page_size > MAX_PAGE_SIZE {
                return Err(ApiError::PageSizeTooLarge);
            }
            params.append_pair("pageSize", &self.page_size.to_string());
        }
        if self.page != 0 {
            params.append_pair("page", &self.page.to_string());
        }
        if !self.category.is_empty() {
            if !CATEGORY_OPTIONS.contains(&self.category.as_str()) {
                return Err(ApiError::InvalidCategory);
            }
            params.append_pair("category", &self.category);
        }

        Ok(params.finish())
    }
}
