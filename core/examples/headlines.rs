//! Query three endpoints and print a short page of each result.
//!
//! Usage: `NEWS_API_KEY=<key> cargo run --example headlines`

use newsapi_core::{ArticleResponse, Config, NewsApiClient, SourceResponse};

const PAGE_SIZE: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("NEWS_API_KEY")?;
    let client = NewsApiClient::new(&api_key);

    // GET /everything?sources=bbc-news&excludeDomains=techcrunch.com,thenextweb.com
    let response = client.get(
        "everything",
        &Config {
            sources: vec!["bbc-news".to_string()],
            excluded_domains: vec!["techcrunch.com".to_string(), "thenextweb.com".to_string()],
            ..Config::default()
        },
    )?;
    println!("Request URL: {}", response.url);
    let status = response.status;
    let result: ArticleResponse = serde_json::from_str(&response.body.read_to_string()?)?;
    println!("Status Code: {status} {}", result.status.to_uppercase());
    if status != 200 {
        println!("Error Message: {}", result.message.clone().unwrap_or_default());
        println!();
    }
    println!("{} results found", result.total_results);
    print_articles(&result);

    // GET /top-headlines?searchIn=title&pageSize=3
    let response = client.get(
        "top-headlines",
        &Config {
            search_in: vec!["title".to_string()],
            page_size: PAGE_SIZE as u32,
            ..Config::default()
        },
    )?;
    println!("Request URL: {}", response.url);
    let status = response.status;
    let result: ArticleResponse = serde_json::from_str(&response.body.read_to_string()?)?;
    println!("Status: {status} {}", result.status.to_uppercase());
    if status != 200 {
        println!("Error Message: {}", result.message.clone().unwrap_or_default());
        println!();
    }
    println!("{} results found", result.total_results);
    print_articles(&result);

    // GET /sources?
    let response = client.get("sources", &Config::default())?;
    println!("Request URL: {}", response.url);
    let status = response.status;
    let result: SourceResponse = serde_json::from_str(&response.body.read_to_string()?)?;
    println!("Status: {status} {}", result.status.to_uppercase());
    if status != 200 {
        println!("Error Message: {}", result.message.clone().unwrap_or_default());
        println!();
    }
    println!("{} results found", result.sources.len());
    for (i, source) in result.sources.iter().take(PAGE_SIZE).enumerate() {
        println!("Source {}", i + 1);
        println!("ID: {}", source.id);
        println!("Name: {}", source.name);
        println!("Description: {}", source.description);
        println!("URL: {}", source.url);
        println!("Category: {}", source.category);
        println!();
    }

    Ok(())
}

fn print_articles(result: &ArticleResponse) {
    for (i, article) in result.articles.iter().take(PAGE_SIZE).enumerate() {
        println!("Article {}", i + 1);
        println!("Title: {}", article.title);
        println!("Author: {}", article.author.as_deref().unwrap_or(""));
        println!("Description: {}", article.description.as_deref().unwrap_or(""));
        println!("PublishedAt: {}", article.published_at);
        println!();
    }
}
