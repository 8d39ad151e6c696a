//! Logging and observability
//!
//! This module provides structured logging with configurable log levels,
//! console output, and optional local file logging with rotation.
//!
//! # Example
//!
//! ```no_run
//! use odonto::logging::init_logging;
//! use odonto::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
