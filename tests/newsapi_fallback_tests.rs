//! NewsAPI fallback source against a local stand-in server
//!
//! The stand-in records every query string it receives and answers with a
//! canned `top-headlines` body.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use news_shim::{
    error::FetchError,
    sources::{normalize::hash_string, FetchRequest, HeadlineSource, NewsApiSource},
};
use serde_json::{json, Value};

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
struct Upstream {
    seen: Seen,
    status: StatusCode,
    body: Value,
    delay: Duration,
}

async fn top_headlines(
    State(upstream): State<Upstream>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    upstream.seen.lock().unwrap().push(params);
    tokio::time::sleep(upstream.delay).await;
    (upstream.status, Json(upstream.body.clone())).into_response()
}

/// Starts the stand-in on an ephemeral port and returns its base URL.
async fn spawn_upstream(status: StatusCode, body: Value, delay: Duration) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/v2/top-headlines", get(top_headlines))
        .with_state(Upstream {
            seen: seen.clone(),
            status,
            body,
            delay,
        });

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v2", addr), seen)
}

fn sample_body() -> Value {
    json!({
        "status": "ok",
        "totalResults": 38,
        "articles": [
            {
                "source": {"id": null, "name": "The Daily Times"},
                "author": "A. Writer",
                "title": "Local Team Wins Championship - The Daily Times",
                "description": "Fans flood the streets.",
                "url": "https://example.com/sports/championship",
                "urlToImage": "https://example.com/img/championship.jpg",
                "publishedAt": "2024-05-17T10:00:00Z",
                "content": "..."
            },
            {
                "source": {"id": "wire", "name": "Wire"},
                "title": "Chip exports rise",
                "description": null,
                "url": "https://example.com/tech/chips",
                "urlToImage": null,
                "publishedAt": "2024-05-17T11:00:00Z"
            }
        ]
    })
}

fn source(base_url: &str) -> NewsApiSource {
    NewsApiSource::new(base_url, Some("test-key".to_string()), Duration::from_secs(10))
}

#[tokio::test]
async fn test_fetch_maps_category_and_normalizes_articles() {
    let (base, seen) = spawn_upstream(StatusCode::OK, sample_body(), Duration::ZERO).await;

    let result = source(&base)
        .fetch(&FetchRequest::new("Technology", 2, 5))
        .await
        .unwrap();

    let params = seen.lock().unwrap()[0].clone();
    assert_eq!(params["category"], "technology");
    assert_eq!(params["pageSize"], "5");
    assert_eq!(params["page"], "2");
    assert_eq!(params["language"], "en");
    assert_eq!(params["apiKey"], "test-key");
    assert!(!params.contains_key("q"));

    assert!(result.success);
    assert_eq!(result.category, "Technology");
    // Number of returned articles, not totalResults or pageSize
    assert_eq!(result.stats.total, 2);
    assert_eq!(result.stats.extracted, 0);
    assert_eq!(result.stats.source, "NewsAPI");

    let first = &result.entries[0];
    assert_eq!(first.title, "Local Team Wins Championship");
    assert_eq!(
        first.id,
        format!(
            "technology-newsapi-0-{}",
            hash_string("https://example.com/sports/championship")
        )
    );
    assert_eq!(first.source, "The Daily Times");
    assert_eq!(first.published, "2024-05-17T10:00:00Z");
    assert!(first.from_news_api);
    assert!(!first.extracted);

    let second = &result.entries[1];
    assert_eq!(second.title, "Chip exports rise");
    assert_eq!(second.summary, "");
    assert_eq!(second.image_url, "");
    assert!(second.id.starts_with("technology-newsapi-1-"));
}

#[tokio::test]
async fn test_politics_uses_query_instead_of_category() {
    let (base, seen) = spawn_upstream(StatusCode::OK, sample_body(), Duration::ZERO).await;

    source(&base)
        .fetch(&FetchRequest::new("Politics", 1, 10))
        .await
        .unwrap();

    let params = seen.lock().unwrap()[0].clone();
    assert_eq!(params["q"], "politics");
    assert!(!params.contains_key("category"));
}

#[tokio::test]
async fn test_unknown_category_falls_back_to_general() {
    let (base, seen) = spawn_upstream(StatusCode::OK, sample_body(), Duration::ZERO).await;

    source(&base)
        .fetch(&FetchRequest::new("Gardening", 1, 10))
        .await
        .unwrap();

    assert_eq!(seen.lock().unwrap()[0]["category"], "general");
}

#[tokio::test]
async fn test_empty_article_list_is_success() {
    let (base, _) = spawn_upstream(
        StatusCode::OK,
        json!({"status": "ok", "totalResults": 0, "articles": []}),
        Duration::ZERO,
    )
    .await;

    let result = source(&base)
        .fetch(&FetchRequest::new("World", 1, 10))
        .await
        .unwrap();

    assert!(result.success);
    assert!(result.entries.is_empty());
    assert_eq!(result.stats.total, 0);
}

#[tokio::test]
async fn test_null_article_list_is_empty_success() {
    let (base, _) = spawn_upstream(
        StatusCode::OK,
        json!({"status": "ok", "articles": null}),
        Duration::ZERO,
    )
    .await;

    let result = source(&base)
        .fetch(&FetchRequest::new("World", 1, 10))
        .await
        .unwrap();

    assert!(result.success);
    assert!(result.entries.is_empty());
}

#[tokio::test]
async fn test_non_2xx_is_upstream_error() {
    let (base, _) = spawn_upstream(
        StatusCode::UNAUTHORIZED,
        json!({"status": "error", "code": "apiKeyInvalid"}),
        Duration::ZERO,
    )
    .await;

    let err = source(&base)
        .fetch(&FetchRequest::new("World", 1, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Upstream(_)));
    assert_eq!(err.to_string(), "NewsAPI 401: Unauthorized");
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let (base, _) = spawn_upstream(StatusCode::OK, sample_body(), Duration::from_secs(5)).await;
    let source = NewsApiSource::new(base, Some("test-key".to_string()), Duration::from_millis(200));

    let err = source
        .fetch(&FetchRequest::new("World", 1, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Timeout { timeout_ms: 200, .. }));
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let (base, seen) = spawn_upstream(StatusCode::OK, sample_body(), Duration::ZERO).await;
    let source = NewsApiSource::new(base, None, Duration::from_secs(10));

    let err = source
        .fetch(&FetchRequest::new("World", 1, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Config(_)));
    assert!(seen.lock().unwrap().is_empty());
}
