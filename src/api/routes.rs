//! API Routes
//!
//! Configures the Axum router with all news shim endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_cache_handler, extract_handler, health_handler, news_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `GET /api/news/:category` - Headlines for a category (`max`, `page`, `nocache`)
/// - `GET /api/extract` - Full-content extraction for `url`
/// - `POST /api/clear-cache` - Empty the cache
/// - `GET /api/cache/stats` - Cache counters
///
/// # Middleware
/// - CORS: any origin, the browser front-end calls the shim cross-origin
/// - Tracing: logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/news/:category", get(news_handler))
        .route("/api/extract", get(extract_handler))
        .route("/api/clear-cache", post(clear_cache_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
