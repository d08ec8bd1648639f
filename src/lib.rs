//! News Shim - headline aggregation backend
//!
//! Serves category headlines from a delegated scraping script with a
//! NewsAPI fallback, on-demand article extraction, and a TTL cache.

pub mod aggregator;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod tasks;

pub use aggregator::Aggregator;
pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_preflight_task;
