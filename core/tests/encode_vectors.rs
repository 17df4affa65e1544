//! Table-driven vectors for the query-construction engine.
//!
//! Each case carries a name, a configuration, and either the exact expected
//! query string or the expected error message. Asserting on the rendered
//! message pins both the error kind and its wording.

use newsapi_core::Config;

enum Expected {
    Query(&'static str),
    Error(&'static str),
}

struct Case {
    name: &'static str,
    config: Config,
    expected: Expected,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "empty configuration",
            config: Config::default(),
            expected: Expected::Query(""),
        },
        Case {
            name: "single category",
            config: Config {
                category: "technology".to_string(),
                ..Config::default()
            },
            expected: Expected::Query("category=technology"),
        },
        Case {
            name: "language and country pair",
            config: Config {
                language: "sv".to_string(),
                country: "se".to_string(),
                ..Config::default()
            },
            expected: Expected::Query("language=sv&country=se"),
        },
        Case {
            name: "query with spaces",
            config: Config {
                query: "electric cars".to_string(),
                ..Config::default()
            },
            expected: Expected::Query("q=electric+cars"),
        },
        Case {
            name: "sources and excluded domains",
            config: Config {
                sources: strings(&["bbc-news"]),
                excluded_domains: strings(&["techcrunch.com", "thenextweb.com"]),
                ..Config::default()
            },
            expected: Expected::Query(
                "sources=bbc-news&excludeDomains=techcrunch.com%2Cthenextweb.com",
            ),
        },
        Case {
            name: "search fields with one unrecognized entry",
            config: Config {
                search_in: strings(&["title", "summary"]),
                ..Config::default()
            },
            expected: Expected::Query("searchIn=title"),
        },
        Case {
            name: "date window with paging",
            config: Config {
                from: "2025-05-01".to_string(),
                to: "2025-05-31".to_string(),
                page_size: 10,
                page: 4,
                ..Config::default()
            },
            expected: Expected::Query("from=2025-05-01&to=2025-05-31&pageSize=10&page=4"),
        },
        Case {
            name: "sort by publication date",
            config: Config {
                query: "iphone".to_string(),
                sort_by: "publishedAt".to_string(),
                ..Config::default()
            },
            expected: Expected::Query("q=iphone&sortBy=publishedAt"),
        },
        Case {
            name: "query too long",
            config: Config {
                query: "a".repeat(501),
                ..Config::default()
            },
            expected: Expected::Error(
                "query parameter 'q' exceeded max length of 500 characters",
            ),
        },
        Case {
            name: "no recognized search fields",
            config: Config {
                search_in: strings(&["summary", "byline"]),
                ..Config::default()
            },
            expected: Expected::Error("unrecognized value in query parameter: 'searchIn'"),
        },
        Case {
            name: "unsupported language",
            config: Config {
                language: "eo".to_string(),
                ..Config::default()
            },
            expected: Expected::Error("unrecognized value in query parameter: 'language'"),
        },
        Case {
            name: "unsupported country",
            config: Config {
                country: "atlantis".to_string(),
                ..Config::default()
            },
            expected: Expected::Error("unrecognized value in query parameter: 'country'"),
        },
        Case {
            name: "unsupported sort order",
            config: Config {
                sort_by: "trending".to_string(),
                ..Config::default()
            },
            expected: Expected::Error("unrecognized value in query parameter: 'sortBy'"),
        },
        Case {
            name: "page size over limit",
            config: Config {
                page_size: 250,
                ..Config::default()
            },
            expected: Expected::Error("query parameter 'pageSize' exceeded max size of 100"),
        },
        Case {
            name: "unsupported category",
            config: Config {
                category: "weather".to_string(),
                ..Config::default()
            },
            expected: Expected::Error("unrecognized value in query parameter: 'category'"),
        },
        Case {
            name: "oversized query reported before invalid category",
            config: Config {
                query: "a".repeat(600),
                category: "weather".to_string(),
                ..Config::default()
            },
            expected: Expected::Error(
                "query parameter 'q' exceeded max length of 500 characters",
            ),
        },
        Case {
            name: "invalid language reported before invalid sort",
            config: Config {
                language: "eo".to_string(),
                sort_by: "trending".to_string(),
                ..Config::default()
            },
            expected: Expected::Error("unrecognized value in query parameter: 'language'"),
        },
    ]
}

#[test]
fn encode_vectors() {
    for case in cases() {
        let name = case.name;
        match (case.config.encode(), case.expected) {
            (Ok(query), Expected::Query(expected)) => {
                assert_eq!(query, expected, "{name}: query string");
            }
            (Err(err), Expected::Error(expected)) => {
                assert_eq!(err.to_string(), expected, "{name}: error message");
            }
            (Ok(query), Expected::Error(expected)) => {
                panic!("{name}: expected error {expected:?}, got query {query:?}");
            }
            (Err(err), Expected::Query(expected)) => {
                panic!("{name}: expected query {expected:?}, got error {err}");
            }
        }
    }
}
