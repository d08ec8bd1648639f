//! Delegated Process Runner
//!
//! Runs `<interpreter> <script> <args...>`, waits for it under a deadline
//! and parses its standard output as one JSON document.

use std::process::Stdio;
use std::time::Duration;

use serde_json::Value;
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::error::FetchError;

/// Launches delegate scripts with a fixed interpreter.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    interpreter: String,
}

impl ScriptRunner {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Runs `script` with `args` appended positionally.
    ///
    /// Exactly one outcome per call:
    /// - exit 0 with JSON on stdout: the parsed document
    /// - exit 0 with anything else: `FetchError::Parse`
    /// - non-zero exit: `FetchError::Process` with the captured stderr
    /// - still running at the deadline: the child is killed, its buffered
    ///   output dropped, and `FetchError::Timeout` returned
    /// - spawn failure: `FetchError::Launch`
    pub async fn run(
        &self,
        script: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<Value, FetchError> {
        info!(
            interpreter = %self.interpreter,
            script,
            args = %args.join(" "),
            "Executing delegate script"
        );

        let child = Command::new(&self.interpreter)
            .arg(script)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                error!(interpreter = %self.interpreter, error = %e, "Failed to start script");
                FetchError::Launch(e.to_string())
            })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| FetchError::Launch(e.to_string()))?,
            Err(_) => {
                let timeout_ms = timeout.as_millis() as u64;
                error!(script, timeout_ms, "Script execution timed out");
                return Err(FetchError::Timeout {
                    operation: "Script execution".to_string(),
                    timeout_ms,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            error!(script, code = ?output.status.code(), stderr = %stderr, "Script exited with failure");
            return Err(FetchError::Process {
                code: output.status.code(),
                stderr,
            });
        }

        debug!(script, bytes = output.stdout.len(), "Script finished");

        serde_json::from_slice(&output.stdout).map_err(|e| {
            error!(script, error = %e, "Failed to parse script output as JSON");
            FetchError::Parse(e.to_string())
        })
    }
}
