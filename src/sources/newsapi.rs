//! NewsAPI fallback source
//!
//! Fetches `top-headlines` from NewsAPI.org and reshapes the articles into
//! the common `NewsResult` schema.
//! https://newsapi.org/docs/endpoints/top-headlines

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use super::normalize::{clean_title, hash_string};
use super::{FetchRequest, HeadlineSource};
use crate::error::FetchError;
use crate::models::{NewsEntry, NewsResult, NewsStats};

/// `stats.source` of every result produced here
pub const NEWSAPI_SOURCE_LABEL: &str = "NewsAPI";

/// NewsAPI response structures
#[derive(Debug, Deserialize)]
struct TopHeadlinesResponse {
    #[serde(default)]
    articles: Option<Vec<Article>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Article {
    source: Option<ArticleSource>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    url_to_image: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArticleSource {
    name: Option<String>,
}

/// How a category is expressed on the NewsAPI side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Category(&'static str),
    Query(&'static str),
}

impl CategoryFilter {
    /// Maps our category names onto NewsAPI's vocabulary.
    ///
    /// Politics has no NewsAPI category and becomes a free-text query;
    /// anything unknown is treated as general news.
    pub fn for_category(category: &str) -> Self {
        if category.eq_ignore_ascii_case("politics") {
            return CategoryFilter::Query("politics");
        }

        CategoryFilter::Category(match category {
            "World" => "general",
            "Business" => "business",
            "Technology" => "technology",
            "Entertainment" => "entertainment",
            "Sports" => "sports",
            "Science" => "science",
            "Health" => "health",
            _ => "general",
        })
    }

    fn as_param(&self) -> (&'static str, &'static str) {
        match self {
            CategoryFilter::Category(c) => ("category", *c),
            CategoryFilter::Query(q) => ("q", *q),
        }
    }
}

/// Fallback headline source.
#[derive(Debug, Clone)]
pub struct NewsApiSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl NewsApiSource {
    /// Creates the source; a missing `api_key` makes every fetch fail fast.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            timeout,
        }
    }

    async fn request(
        &self,
        api_key: &str,
        request: &FetchRequest,
    ) -> Result<TopHeadlinesResponse, FetchError> {
        let url = format!("{}/top-headlines", self.base_url);
        let (filter_name, filter_value) = CategoryFilter::for_category(&request.category).as_param();
        let page_size = request.max_items.to_string();
        let page = request.page.to_string();

        info!(
            url = %url,
            filter = %format!("{filter_name}={filter_value}"),
            page_size = request.max_items,
            page = request.page,
            api_key = "***",
            "Requesting NewsAPI"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                (filter_name, filter_value),
                ("pageSize", page_size.as_str()),
                ("page", page.as_str()),
                ("language", "en"),
                ("apiKey", api_key),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Upstream(format!(
                "NewsAPI {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<TopHeadlinesResponse>()
            .await
            .map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                operation: "NewsAPI request".to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else if err.is_decode() {
            FetchError::Upstream(format!("NewsAPI returned a malformed body: {}", err))
        } else {
            // Strip the URL so the credential never reaches logs or clients
            FetchError::Upstream(format!("NewsAPI request failed: {}", err.without_url()))
        }
    }
}

#[async_trait]
impl HeadlineSource for NewsApiSource {
    fn name(&self) -> &str {
        NEWSAPI_SOURCE_LABEL
    }

    async fn fetch(&self, request: &FetchRequest) -> Result<NewsResult, FetchError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(FetchError::Config(
                "NEWSAPI_KEY environment variable is not set".to_string(),
            ));
        };

        let body = self.request(api_key, request).await.map_err(|e| {
            error!(category = %request.category, error = %e, "NewsAPI error");
            e
        })?;

        Ok(to_news_result(
            &request.category,
            body.articles.unwrap_or_default(),
        ))
    }
}

fn to_news_result(category: &str, articles: Vec<Article>) -> NewsResult {
    let prefix = category.to_lowercase();
    let total = articles.len();

    let entries = articles
        .into_iter()
        .enumerate()
        .map(|(index, article)| {
            let title = article
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(clean_title)
                .unwrap_or_else(|| "Untitled".to_string());
            let link = article.url.unwrap_or_default();
            let hashed = if link.is_empty() {
                hash_string(&title)
            } else {
                hash_string(&link)
            };

            NewsEntry {
                id: format!("{}-newsapi-{}-{}", prefix, index, hashed),
                title,
                link,
                published: article.published_at.unwrap_or_default(),
                summary: article.description.unwrap_or_default(),
                source: article.source.and_then(|s| s.name).unwrap_or_default(),
                image_url: article.url_to_image.unwrap_or_default(),
                from_news_api: true,
                extracted: false,
                ..Default::default()
            }
        })
        .collect();

    NewsResult {
        success: true,
        category: category.to_string(),
        entries,
        stats: NewsStats {
            total,
            extracted: 0,
            source: NEWSAPI_SOURCE_LABEL.to_string(),
            ..Default::default()
        },
        error: None,
    }
}
