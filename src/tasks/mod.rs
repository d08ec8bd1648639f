//! Background Tasks Module
//!
//! Contains background tasks started alongside the HTTP server.
//!
//! # Tasks
//! - Preflight: checks that the delegate interpreter and its modules are installed

mod preflight;

pub use preflight::{check_interpreter, spawn_preflight_task, PreflightReport};
