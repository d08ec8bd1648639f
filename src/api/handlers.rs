//! API Handlers
//!
//! HTTP request handlers for each news shim endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::aggregator::Aggregator;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{NewsError, Result};
use crate::models::{
    CacheStatsResponse, ClearCacheResponse, ExtractQuery, ExtractionResult, HealthResponse,
    NewsQuery, NewsResult,
};
use crate::sources::{HeadlineSource, NewsApiSource, ScriptExtractor, ScriptRunner, ScriptSource};

/// Application state shared across all handlers.
///
/// The aggregator owns the cache; handlers only reach it through the aggregator.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    /// Creates a new AppState around an already-built aggregator.
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }

    /// Wires the delegate script, the NewsAPI fallback and the cache from configuration.
    pub fn from_config(config: &Config) -> Self {
        let runner = Arc::new(ScriptRunner::new(config.python_path.clone()));

        let sources: Vec<Arc<dyn HeadlineSource>> = vec![
            Arc::new(ScriptSource::new(
                runner.clone(),
                config.news_script.clone(),
                config.script_timeout(),
            )),
            Arc::new(NewsApiSource::new(
                config.newsapi_base_url.clone(),
                config.newsapi_key.clone(),
                config.newsapi_timeout(),
            )),
        ];
        let extractor = Arc::new(ScriptExtractor::new(
            runner,
            config.extract_script.clone(),
            config.extract_timeout(),
        ));

        Self::new(Aggregator::new(
            sources,
            extractor,
            CacheStore::new(config.cache_ttl()),
            config.cache_enabled,
        ))
    }
}

/// Handler for GET /api/news/:category
///
/// Returns 200 with a `NewsResult` from whichever source answered, or 502
/// when every source failed.
pub async fn news_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<NewsResult>> {
    let query = NewsQuery::from_pairs(pairs);
    let result = state
        .aggregator
        .get_news(
            &category,
            query.page(),
            query.max_items(),
            query.bypass_cache(),
        )
        .await?;

    Ok(Json(result))
}

/// Handler for GET /api/extract?url=...
pub async fn extract_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ExtractionResult>> {
    let query = ExtractQuery::from_pairs(pairs);
    let url = query.validate().map_err(NewsError::InvalidRequest)?;
    let result = state.aggregator.extract(url).await?;

    Ok(Json(result))
}

/// Handler for POST /api/clear-cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    state.aggregator.clear_cache().await;
    Json(ClearCacheResponse::cleared())
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(state.aggregator.cache_stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
