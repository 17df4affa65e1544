//! Mock NewsAPI server used by the integration tests.
//!
//! Serves the four endpoints under `/v2/` against a fixed set of canned
//! articles and sources. Requests without an `X-Api-Key` header get the same
//! `401` envelope the real API returns; a subset of the query parameters
//! (`q`, `language`, `country`, `category`, `pageSize`) is applied to the
//! fixtures so clients can observe their parameters taking effect.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub content: Option<String>,
    // Fixture metadata used for filtering, never serialized.
    #[serde(skip)]
    pub language: String,
    #[serde(skip)]
    pub country: String,
    #[serde(skip)]
    pub category: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SourceInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub language: String,
    pub country: String,
}

#[derive(Debug, Serialize)]
pub struct ArticleEnvelope {
    pub status: String,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct SourceEnvelope {
    pub status: String,
    pub sources: Vec<SourceInfo>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub code: String,
    pub message: String,
}

pub struct Store {
    pub articles: Vec<Article>,
    pub sources: Vec<SourceInfo>,
}

pub type Db = Arc<Store>;

fn article(
    source: (&str, &str),
    title: &str,
    language: &str,
    country: &str,
    category: &str,
) -> Article {
    Article {
        source: ArticleSource {
            id: Some(source.0.to_string()),
            name: source.1.to_string(),
        },
        author: Some("Staff Writer".to_string()),
        title: title.to_string(),
        description: Some(format!("{title} — full report.")),
        url_to_image: None,
        published_at: "2025-06-01T09:00:00Z".to_string(),
        content: Some(format!("{title}. More inside.")),
        language: language.to_string(),
        country: country.to_string(),
        category: category.to_string(),
    }
}

fn source(id: &str, name: &str, category: &str, language: &str, country: &str) -> SourceInfo {
    SourceInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} coverage."),
        url: format!("https://{id}.example.com"),
        category: category.to_string(),
        language: language.to_string(),
        country: country.to_string(),
    }
}

impl Store {
    pub fn with_fixtures() -> Self {
        Self {
            articles: vec![
                article(
                    ("bbc-news", "BBC News"),
                    "Markets rally after rate decision",
                    "en",
                    "gb",
                    "business",
                ),
                article(
                    ("wired-uk", "Wired UK"),
                    "Quantum chips reach new milestone",
                    "en",
                    "gb",
                    "technology",
                ),
                article(
                    ("abc-news", "ABC News"),
                    "Storm season arrives early",
                    "en",
                    "us",
                    "general",
                ),
                article(
                    ("svt", "SVT Nyheter"),
                    "Ny forskning om klimatet",
                    "sv",
                    "se",
                    "science",
                ),
            ],
            sources: vec![
                source("bbc-news", "BBC News", "general", "en", "gb"),
                source("wired-uk", "Wired UK", "technology", "en", "gb"),
                source("svt", "SVT Nyheter", "general", "sv", "se"),
            ],
        }
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(Store::with_fixtures());
    Router::new()
        .route("/v2/everything", get(everything))
        .route("/v2/top-headlines", get(top_headlines))
        .route("/v2/top-headlines/sources", get(list_sources))
        .route("/v2/sources", get(list_sources))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorEnvelope>)>;

fn require_api_key(headers: &HeaderMap) -> Result<(), (StatusCode, Json<ErrorEnvelope>)> {
    if headers.contains_key("x-api-key") {
        return Ok(());
    }
    Err((
        StatusCode::UNAUTHORIZED,
        Json(ErrorEnvelope {
            status: "error".to_string(),
            code: "apiKeyMissing".to_string(),
            message: "Your API key is missing. Append this to the request with the X-Api-Key header.".to_string(),
        }),
    ))
}

fn page_size(params: &HashMap<String, String>) -> usize {
    params
        .get("pageSize")
        .and_then(|v| v.parse().ok())
        .unwrap_or(usize::MAX)
}

fn matches(params: &HashMap<String, String>, key: &str, value: &str) -> bool {
    params.get(key).map_or(true, |wanted| wanted == value)
}

async fn everything(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult<ArticleEnvelope> {
    require_api_key(&headers)?;
    let mut articles: Vec<Article> = db
        .articles
        .iter()
        .filter(|a| {
            params.get("q").map_or(true, |q| {
                a.title.to_lowercase().contains(&q.to_lowercase())
            })
        })
        .filter(|a| matches(&params, "language", &a.language))
        .cloned()
        .collect();
    let total_results = articles.len();
    articles.truncate(page_size(&params));
    Ok(Json(ArticleEnvelope {
        status: "ok".to_string(),
        total_results,
        articles,
    }))
}

async fn top_headlines(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult<ArticleEnvelope> {
    require_api_key(&headers)?;
    let mut articles: Vec<Article> = db
        .articles
        .iter()
        .filter(|a| matches(&params, "category", &a.category))
        .filter(|a| matches(&params, "country", &a.country))
        .cloned()
        .collect();
    let total_results = articles.len();
    articles.truncate(page_size(&params));
    Ok(Json(ArticleEnvelope {
        status: "ok".to_string(),
        total_results,
        articles,
    }))
}

async fn list_sources(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult<SourceEnvelope> {
    require_api_key(&headers)?;
    let sources: Vec<SourceInfo> = db
        .sources
        .iter()
        .filter(|s| matches(&params, "category", &s.category))
        .filter(|s| matches(&params, "language", &s.language))
        .filter(|s| matches(&params, "country", &s.country))
        .cloned()
        .collect();
    Ok(Json(SourceEnvelope {
        status: "ok".to_string(),
        sources,
    }))
}
