//! Aggregator
//!
//! Orchestrates cache → primary source → fallback sources for headline
//! lists, and cache → extraction script for single articles.
//!
//! Sources are tried in order. A source "wins" when it succeeds with at
//! least one entry; the last source wins on any successful response, even
//! an empty one. Every source is attempted at most once per request.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::cache::{extraction_key, news_key, CacheStats, CachedPayload, CacheStore};
use crate::error::{NewsError, Result};
use crate::models::{ExtractionResult, NewsResult};
use crate::sources::{ArticleExtractor, FetchRequest, HeadlineSource};

/// Shared, lock-protected cache of aggregated payloads.
pub type SharedCache = Arc<RwLock<CacheStore<CachedPayload>>>;

/// Headline and extraction front door used by the HTTP layer.
pub struct Aggregator {
    sources: Vec<Arc<dyn HeadlineSource>>,
    extractor: Arc<dyn ArticleExtractor>,
    cache: SharedCache,
    cache_enabled: bool,
}

impl Aggregator {
    /// Creates an aggregator over `sources`, tried in the given order.
    pub fn new(
        sources: Vec<Arc<dyn HeadlineSource>>,
        extractor: Arc<dyn ArticleExtractor>,
        cache: CacheStore<CachedPayload>,
        cache_enabled: bool,
    ) -> Self {
        Self {
            sources,
            extractor,
            cache: Arc::new(RwLock::new(cache)),
            cache_enabled,
        }
    }

    // == Headlines ==
    /// Returns one page of headlines for `category`.
    ///
    /// `bypass_cache` skips only the cache read; a successful result is
    /// still written back. Failures are never cached.
    pub async fn get_news(
        &self,
        category: &str,
        page: u32,
        max_items: u32,
        bypass_cache: bool,
    ) -> Result<NewsResult> {
        let key = news_key(category, page, max_items);

        if self.cache_enabled && !bypass_cache {
            if let Some(CachedPayload::News(cached)) = self.cache.write().await.get(&key) {
                info!(key = %key, "Using cached data");
                return Ok(cached);
            }
        }

        let request = FetchRequest::new(category, page, max_items);
        let mut first_failure: Option<String> = None;
        let last = self.sources.len().saturating_sub(1);

        for (index, source) in self.sources.iter().enumerate() {
            info!(
                category,
                page,
                max_items,
                source = source.name(),
                "Fetching headlines"
            );

            let reason = match source.fetch(&request).await {
                Ok(result) if result.is_usable() || (index == last && result.success) => {
                    if index > 0 {
                        info!(category, source = source.name(), "Fallback source succeeded");
                    }
                    self.store(key, CachedPayload::News(result.clone())).await;
                    return Ok(result);
                }
                Ok(result) => match result.error {
                    Some(error) => format!("{} reported failure: {}", source.name(), error),
                    None => format!("{} returned no entries", source.name()),
                },
                Err(e) => e.to_string(),
            };

            if index < last {
                warn!(category, source = source.name(), reason = %reason, "Falling back to next source");
            } else {
                error!(category, source = source.name(), reason = %reason, "Last source failed");
            }
            first_failure.get_or_insert(reason);
        }

        let cause = first_failure.unwrap_or_else(|| "no headline sources configured".to_string());
        error!(category, cause = %cause, "All headline sources failed");

        Err(NewsError::AllSourcesFailed {
            category: category.to_string(),
            message: format!("Failed to fetch news from all sources: {}", cause),
        })
    }

    // == Extraction ==
    /// Extracts the full content of one article.
    ///
    /// There is no fallback for extraction; only results flagged
    /// `success: true` by the script are cached.
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        if url.is_empty() {
            return Err(NewsError::InvalidRequest(
                "URL parameter is required".to_string(),
            ));
        }

        let key = extraction_key(url);

        if self.cache_enabled {
            if let Some(CachedPayload::Extraction(cached)) = self.cache.write().await.get(&key) {
                info!(key = %key, "Using cached extraction");
                return Ok(cached);
            }
        }

        match self.extractor.extract(url).await {
            Ok(result) => {
                if result.success {
                    self.store(key, CachedPayload::Extraction(result.clone())).await;
                } else {
                    warn!(url, "Extraction script reported failure, not caching");
                }
                Ok(result)
            }
            Err(e) => {
                error!(url, error = %e, "Article extraction failed");
                Err(NewsError::ExtractionFailed {
                    url: url.to_string(),
                    message: format!("Article extraction failed: {}", e),
                })
            }
        }
    }

    // == Cache Maintenance ==
    /// Drops every cached payload.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    async fn store(&self, key: String, payload: CachedPayload) {
        if self.cache_enabled {
            self.cache.write().await.set(key, payload);
        }
    }
}
