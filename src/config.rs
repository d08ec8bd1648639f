//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default NewsAPI endpoint root.
pub const DEFAULT_NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Interpreter used to run the delegate scripts
    pub python_path: String,
    /// Script that lists headlines for a category
    pub news_script: String,
    /// Script that extracts the full text of one article
    pub extract_script: String,
    /// NewsAPI credential; the fallback source refuses to run without it
    pub newsapi_key: Option<String>,
    /// NewsAPI endpoint root
    pub newsapi_base_url: String,
    /// Whether results are cached at all
    pub cache_enabled: bool,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Timeout for headline listing scripts, in seconds
    pub script_timeout: u64,
    /// Timeout for article extraction scripts, in seconds
    pub extract_timeout: u64,
    /// Timeout for the NewsAPI request, in seconds
    pub newsapi_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3001)
    /// - `PYTHON_PATH` - Interpreter for the delegate scripts (default: python3)
    /// - `NEWS_SCRIPT` - Headline script path (default: ./fetch_google_news.py)
    /// - `EXTRACT_SCRIPT` - Extraction script path (default: ./article_extractor.py)
    /// - `NEWSAPI_KEY` - NewsAPI credential (default: unset)
    /// - `NEWSAPI_BASE_URL` - NewsAPI endpoint root (default: https://newsapi.org/v2)
    /// - `CACHE_ENABLED` - Enable result caching (default: true)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 1800)
    /// - `SCRIPT_TIMEOUT` - Listing script timeout in seconds (default: 30)
    /// - `EXTRACT_TIMEOUT` - Extraction script timeout in seconds (default: 60)
    /// - `NEWSAPI_TIMEOUT` - NewsAPI request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("PORT").unwrap_or(defaults.server_port),
            python_path: string_var("PYTHON_PATH").unwrap_or(defaults.python_path),
            news_script: string_var("NEWS_SCRIPT").unwrap_or(defaults.news_script),
            extract_script: string_var("EXTRACT_SCRIPT").unwrap_or(defaults.extract_script),
            newsapi_key: string_var("NEWSAPI_KEY"),
            newsapi_base_url: string_var("NEWSAPI_BASE_URL")
                .unwrap_or(defaults.newsapi_base_url),
            cache_enabled: parse_var("CACHE_ENABLED").unwrap_or(defaults.cache_enabled),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            script_timeout: parse_var("SCRIPT_TIMEOUT").unwrap_or(defaults.script_timeout),
            extract_timeout: parse_var("EXTRACT_TIMEOUT").unwrap_or(defaults.extract_timeout),
            newsapi_timeout: parse_var("NEWSAPI_TIMEOUT").unwrap_or(defaults.newsapi_timeout),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn script_timeout(&self) -> Duration {
        Duration::from_secs(self.script_timeout)
    }

    pub fn extract_timeout(&self) -> Duration {
        Duration::from_secs(self.extract_timeout)
    }

    pub fn newsapi_timeout(&self) -> Duration {
        Duration::from_secs(self.newsapi_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3001,
            python_path: "python3".to_string(),
            news_script: "./fetch_google_news.py".to_string(),
            extract_script: "./article_extractor.py".to_string(),
            newsapi_key: None,
            newsapi_base_url: DEFAULT_NEWSAPI_BASE_URL.to_string(),
            cache_enabled: true,
            cache_ttl: 30 * 60,
            script_timeout: 30,
            extract_timeout: 60,
            newsapi_timeout: 10,
        }
    }
}

/// Non-empty environment variable, if set.
fn string_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
