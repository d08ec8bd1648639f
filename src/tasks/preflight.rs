//! Interpreter Preflight Task
//!
//! Checks once at startup that the delegate interpreter runs and that the
//! Python modules the scripts import are present. Results are only logged:
//! without them the primary source fails and requests fall back to NewsAPI.

use std::process::Stdio;

use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Modules imported by the headline and extraction scripts
pub const REQUIRED_MODULES: &str = "feedparser, newspaper";

/// Outcome of the startup checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreflightReport {
    pub interpreter_available: bool,
    pub modules_available: bool,
}

/// Runs `<python> --version` and `<python> -c "import ..."`.
pub async fn check_interpreter(python_path: &str) -> PreflightReport {
    let interpreter_available = succeeds(python_path, &["--version"]).await;
    if interpreter_available {
        info!(python = python_path, "Python is available");
    } else {
        error!(
            python = python_path,
            "Python not found; install Python 3 or set PYTHON_PATH"
        );
    }

    let import = format!("import {}", REQUIRED_MODULES);
    let modules_available = interpreter_available && succeeds(python_path, &["-c", &import]).await;
    if modules_available {
        info!("Required Python modules are installed");
    } else if interpreter_available {
        warn!(
            modules = REQUIRED_MODULES,
            "Missing required Python modules; install them with: pip install feedparser newspaper3k"
        );
    }

    PreflightReport {
        interpreter_available,
        modules_available,
    }
}

/// Spawns [`check_interpreter`] in the background.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be aborted during
/// graceful shutdown if the checks are still running.
pub fn spawn_preflight_task(python_path: String) -> JoinHandle<PreflightReport> {
    tokio::spawn(async move { check_interpreter(&python_path).await })
}

async fn succeeds(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}
