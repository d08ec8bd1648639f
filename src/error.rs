//! Error types for the news shim
//!
//! `FetchError` describes why a single upstream source could not produce
//! headlines; `NewsError` is what the HTTP layer turns into a status code
//! and a `{success:false, error, ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of one headline source or of the delegated extraction script.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The delegated process could not be started
    #[error("Failed to start script: {0}")]
    Launch(String),

    /// The delegated process or HTTP call exceeded its time budget
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    /// Delegated process output was not valid JSON
    #[error("Script output is not valid JSON: {0}")]
    Parse(String),

    /// Delegated process exited with a non-zero status
    #[error("Script exited with code {}: {stderr}", display_exit_code(.code))]
    Process { code: Option<i32>, stderr: String },

    /// Fallback HTTP API answered with a non-2xx status or an unusable body
    #[error("{0}")]
    Upstream(String),

    /// A required credential or setting is missing
    #[error("{0}")]
    Config(String),
}

fn display_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "null".to_string(),
    }
}

// == News Error Enum ==
/// Errors surfaced by the HTTP endpoints.
#[derive(Error, Debug)]
pub enum NewsError {
    /// A required request parameter is missing or empty
    #[error("{0}")]
    InvalidRequest(String),

    /// Every configured headline source failed
    #[error("{message}")]
    AllSourcesFailed { category: String, message: String },

    /// The extraction script failed outright
    #[error("{message}")]
    ExtractionFailed { url: String, message: String },
}

// == IntoResponse Implementation ==
impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            NewsError::InvalidRequest(error) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": error }),
            ),
            NewsError::AllSourcesFailed { category, message } => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "success": false,
                    "error": message,
                    "category": category,
                    "entries": []
                }),
            ),
            NewsError::ExtractionFailed { url, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": message, "url": url }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP-facing operations.
pub type Result<T> = std::result::Result<T, NewsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_message() {
        let err = FetchError::Process {
            code: Some(3),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Script exited with code 3: boom");

        let err = FetchError::Process {
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "Script exited with code null: ");
    }

    #[test]
    fn test_timeout_message() {
        let err = FetchError::Timeout {
            operation: "Script execution".to_string(),
            timeout_ms: 30_000,
        };
        assert_eq!(err.to_string(), "Script execution timed out after 30000ms");
    }

    #[test]
    fn test_status_codes() {
        let resp = NewsError::InvalidRequest("URL parameter is required".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = NewsError::AllSourcesFailed {
            category: "World".into(),
            message: "nope".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = NewsError::ExtractionFailed {
            url: "https://example.com".into(),
            message: "nope".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
