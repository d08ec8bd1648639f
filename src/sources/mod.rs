//! Headline Sources
//!
//! Every upstream that can produce a `NewsResult` implements
//! [`HeadlineSource`]; the aggregator walks an ordered list of them.
//!
//! # Sources
//! - [`ScriptSource`]: delegated scraping script (primary)
//! - [`NewsApiSource`]: NewsAPI top-headlines over HTTPS (fallback)
//!
//! Full-article extraction has a single implementation, [`ScriptExtractor`],
//! behind the [`ArticleExtractor`] trait.

pub mod newsapi;
pub mod normalize;
pub mod process;
pub mod script;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{ExtractionResult, NewsResult};

pub use newsapi::NewsApiSource;
pub use process::ScriptRunner;
pub use script::{ScriptExtractor, ScriptSource};

/// Parameters shared by every source for one headline request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub category: String,
    pub page: u32,
    pub max_items: u32,
}

impl FetchRequest {
    pub fn new(category: impl Into<String>, page: u32, max_items: u32) -> Self {
        Self {
            category: category.into(),
            page,
            max_items,
        }
    }
}

/// An upstream able to list headlines for a category page.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Label used in logs
    fn name(&self) -> &str;

    /// Fetches one page of headlines, normalized to the common schema.
    async fn fetch(&self, request: &FetchRequest) -> Result<NewsResult, FetchError>;
}

/// On-demand full-content extraction for a single article.
#[async_trait]
pub trait ArticleExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ExtractionResult, FetchError>;
}
