//! News Shim - headline aggregation backend
//!
//! Serves category headlines from a delegated scraping script with a
//! NewsAPI fallback, on-demand article extraction, and a TTL cache.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use news_shim::api::{create_router, AppState};
use news_shim::tasks::PreflightReport;
use news_shim::{spawn_preflight_task, Config};

/// Main entry point for the news shim.
///
/// # Startup Sequence
/// 1. Load `.env` if present
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from environment variables
/// 4. Build sources, aggregator and cache
/// 5. Bind the HTTP listener and start the interpreter preflight check
/// 6. Serve until SIGINT/SIGTERM, then shut down gracefully
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "news_shim=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting news shim");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, python={}, cache_enabled={}, cache_ttl={}s, newsapi_key={}",
        config.server_port,
        config.python_path,
        config.cache_enabled,
        config.cache_ttl,
        if config.newsapi_key.is_some() { "set" } else { "unset" }
    );
    if config.newsapi_key.is_none() {
        warn!("NEWSAPI_KEY is not set; the NewsAPI fallback will fail");
    }

    let state = AppState::from_config(&config);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("News API server running at http://{}", addr);

    let preflight = spawn_preflight_task(config.python_path.clone());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(preflight))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the preflight task if it is still running.
async fn shutdown_signal(preflight: JoinHandle<PreflightReport>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if !preflight.is_finished() {
        preflight.abort();
        warn!("Preflight task aborted");
    }
}
