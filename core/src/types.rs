//! Response body types for the two envelope shapes the API returns.
//!
//! # Design
//! The dispatcher never decodes bodies — these types exist for callers, who
//! deserialize with `serde_json` after reading the body stream. `code` and
//! `message` are only populated on API-level failure, which the API reports
//! inside the envelope regardless of HTTP status. The mock-server crate
//! defines its own serialize-side copies of these shapes; integration tests
//! catch schema drift between the two crates.

use serde::Deserialize;

/// Envelope for `everything` and `top-headlines`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A single article.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "urlToImage")]
    pub image_url: Option<String>,
    pub published_at: String,
    pub content: Option<String>,
}

/// The outlet an article came from. `id` is null for unindexed outlets.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// Envelope for `sources` and `top-headlines/sources`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceResponse {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sources: Vec<SourceInfo>,
}

/// A publisher indexed by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub language: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_envelope_decodes() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": "bbc-news", "name": "BBC News"},
                "author": "A. Reporter",
                "title": "Headline",
                "description": "Summary",
                "urlToImage": "https://example.com/img.jpg",
                "publishedAt": "2025-01-01T12:00:00Z",
                "content": "Body text"
            }]
        }"#;
        let decoded: ArticleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.status, "ok");
        assert_eq!(decoded.total_results, 1);
        assert_eq!(decoded.articles[0].source.id.as_deref(), Some("bbc-news"));
        assert_eq!(decoded.articles[0].title, "Headline");
        assert!(decoded.code.is_none());
    }

    #[test]
    fn nullable_article_fields_decode_from_null() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": null, "name": "Blog"},
                "author": null,
                "title": "Untitled",
                "description": null,
                "urlToImage": null,
                "publishedAt": "2025-01-01T12:00:00Z",
                "content": null
            }]
        }"#;
        let decoded: ArticleResponse = serde_json::from_str(body).unwrap();
        let article = &decoded.articles[0];
        assert!(article.source.id.is_none());
        assert!(article.author.is_none());
        assert!(article.image_url.is_none());
    }

    #[test]
    fn error_envelope_decodes_without_results() {
        let body = r#"{
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        }"#;
        let decoded: ArticleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.status, "error");
        assert_eq!(decoded.code.as_deref(), Some("apiKeyInvalid"));
        assert_eq!(decoded.total_results, 0);
        assert!(decoded.articles.is_empty());
    }

    #[test]
    fn source_envelope_decodes() {
        let body = r#"{
            "status": "ok",
            "sources": [{
                "id": "bbc-news",
                "name": "BBC News",
                "description": "British public broadcaster",
                "url": "https://www.bbc.co.uk/news",
                "category": "general",
                "language": "en",
                "country": "gb"
            }]
        }"#;
        let decoded: SourceResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.sources.len(), 1);
        assert_eq!(decoded.sources[0].country, "gb");
    }
}
