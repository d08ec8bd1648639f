//! API Module
//!
//! HTTP handlers and routing for the news shim JSON API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /api/news/:category` - Aggregated headlines
//! - `GET /api/extract?url=` - Single-article extraction
//! - `POST /api/clear-cache` - Empty the cache
//! - `GET /api/cache/stats` - Cache counters

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
