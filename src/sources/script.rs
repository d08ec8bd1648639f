//! Delegated-script sources
//!
//! The headline script is called as `<script> <category> <max> <page>`, the
//! extraction script as `<script> <url>`; both print one JSON document.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{ArticleExtractor, FetchRequest, HeadlineSource, ScriptRunner};
use crate::error::FetchError;
use crate::models::{ExtractionResult, NewsResult};

/// Primary headline source backed by the scraping script.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    runner: Arc<ScriptRunner>,
    script: String,
    timeout: Duration,
}

impl ScriptSource {
    pub fn new(runner: Arc<ScriptRunner>, script: impl Into<String>, timeout: Duration) -> Self {
        Self {
            runner,
            script: script.into(),
            timeout,
        }
    }
}

#[async_trait]
impl HeadlineSource for ScriptSource {
    fn name(&self) -> &str {
        "delegate script"
    }

    async fn fetch(&self, request: &FetchRequest) -> Result<NewsResult, FetchError> {
        let args = [
            request.category.clone(),
            request.max_items.to_string(),
            request.page.to_string(),
        ];
        let value = self.runner.run(&self.script, &args, self.timeout).await?;
        decode(value)
    }
}

/// Extraction backed by the article extraction script.
#[derive(Debug, Clone)]
pub struct ScriptExtractor {
    runner: Arc<ScriptRunner>,
    script: String,
    timeout: Duration,
}

impl ScriptExtractor {
    pub fn new(runner: Arc<ScriptRunner>, script: impl Into<String>, timeout: Duration) -> Self {
        Self {
            runner,
            script: script.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ArticleExtractor for ScriptExtractor {
    async fn extract(&self, url: &str) -> Result<ExtractionResult, FetchError> {
        let value = self
            .runner
            .run(&self.script, &[url.to_string()], self.timeout)
            .await?;
        decode(value)
    }
}

/// Well-formed JSON that is not an object of the expected shape is still a parse failure.
fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(all(test, unix))]
mod tests {
    use super::super::process::test_support::write_script;
    use super::*;

    fn runner() -> Arc<ScriptRunner> {
        Arc::new(ScriptRunner::new("sh"))
    }

    #[tokio::test]
    async fn test_script_source_passes_positional_args() {
        let script = write_script(
            r#"printf '{"success":true,"category":"%s","entries":[{"id":"x","title":"max=%s page=%s"}],"stats":{"total":1,"extracted":0,"source":"Google News RSS"}}' "$1" "$2" "$3""#,
        );
        let source = ScriptSource::new(runner(), script.to_str().unwrap(), Duration::from_secs(5));

        let result = source
            .fetch(&FetchRequest::new("Science", 2, 7))
            .await
            .unwrap();

        assert!(result.is_usable());
        assert_eq!(result.category, "Science");
        assert_eq!(result.entries[0].title, "max=7 page=2");
        assert_eq!(result.stats.source, "Google News RSS");
    }

    #[tokio::test]
    async fn test_script_source_non_object_output_is_parse_error() {
        let script = write_script("echo '[1,2]'");
        let source = ScriptSource::new(runner(), script.to_str().unwrap(), Duration::from_secs(5));

        let err = source
            .fetch(&FetchRequest::new("World", 1, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_script_extractor_passes_url() {
        let script = write_script(r#"printf '{"success":true,"url":"%s","text":"body"}' "$1""#);
        let extractor =
            ScriptExtractor::new(runner(), script.to_str().unwrap(), Duration::from_secs(5));

        let result = extractor.extract("https://example.com/a").await.unwrap();
        assert!(result.success);
        assert_eq!(result.fields["url"], "https://example.com/a");
        assert_eq!(result.fields["text"], "body");
    }
}
