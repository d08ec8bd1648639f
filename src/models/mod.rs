//! Request and response models for the news API
//!
//! This module defines the DTOs used for query strings, the normalized
//! headline schema and the extraction passthrough.

pub mod extraction;
pub mod news;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use extraction::ExtractionResult;
pub use news::{NewsEntry, NewsResult, NewsStats};
pub use requests::{ExtractQuery, NewsQuery};
pub use responses::{CacheStatsResponse, ClearCacheResponse, HealthResponse};
