//! Headline list models
//!
//! `NewsResult` is the one shape both upstream sources are normalized into
//! and the body returned by `GET /api/news/:category`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized list of headlines for one category page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsResult {
    #[serde(deserialize_with = "super::extraction::truthy")]
    pub success: bool,
    pub category: String,
    /// Upstream order, never re-sorted
    pub entries: Vec<NewsEntry>,
    pub stats: NewsStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NewsResult {
    /// A result carrying at least one entry and not flagged as failed.
    pub fn is_usable(&self) -> bool {
        self.success && !self.entries.is_empty()
    }
}

/// One headline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsEntry {
    pub id: String,
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
    pub source: String,
    pub image_url: String,
    #[serde(rename = "fromNewsAPI")]
    pub from_news_api: bool,
    pub extracted: bool,
    /// Delegate-specific fields passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Counters describing where a result came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsStats {
    pub total: usize,
    pub extracted: usize,
    pub source: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
