//! Configuration management
//!
//! This module handles loading and validating odonto's TOML configuration,
//! with `${VAR}` environment substitution and `ODONTO_*` overrides.

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{ApiConfig, ApplicationConfig, DashboardConfig, LoggingConfig, OdontoConfig, RetryConfig};
