//! Cache Module
//!
//! In-memory TTL cache for headline lists and article extractions, plus the
//! request fingerprints used to address it.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

use crate::models::{ExtractionResult, NewsResult};

// == Public Constants ==
/// Characters of the article URL that participate in an extraction key
pub const EXTRACTION_KEY_URL_PREFIX: usize = 100;

/// Anything the aggregator stores in the shared cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedPayload {
    News(NewsResult),
    Extraction(ExtractionResult),
}

/// Fingerprint of a headline request.
pub fn news_key(category: &str, page: u32, max_items: u32) -> String {
    format!("{}_p{}_m{}", category, page, max_items)
}

/// Fingerprint of an extraction request.
///
/// Distinct URLs sharing their first 100 characters share a key.
pub fn extraction_key(url: &str) -> String {
    let prefix: String = url.chars().take(EXTRACTION_KEY_URL_PREFIX).collect();
    format!("extract_{}", prefix)
}
