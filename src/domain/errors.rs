//! Domain error types
//!
//! This module defines the error hierarchy for odonto. All errors are
//! domain-specific and don't expose third-party types: the REST client maps
//! `reqwest` failures into [`ApiError`] before they cross this boundary.

use thiserror::Error;

/// Main odonto error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum OdontoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Clinic API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Clinic REST API errors
///
/// Errors that occur when talking to the clinic backend. These errors
/// don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to connect to the backend
    #[error("Failed to connect to clinic API: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Response body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client error (4xx other than 404)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },
}

impl ApiError {
    /// Whether a retry could plausibly succeed
    ///
    /// Connection failures, timeouts and 5xx responses are transient;
    /// 4xx responses and undecodable bodies are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::ConnectionFailed(_) | ApiError::Timeout(_) | ApiError::ServerError { .. }
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for OdontoError {
    fn from(err: std::io::Error) -> Self {
        OdontoError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for OdontoError {
    fn from(err: serde_json::Error) -> Self {
        OdontoError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for OdontoError {
    fn from(err: toml::de::Error) -> Self {
        OdontoError::Configuration(format!("TOML parse error: {err}"))
    }
}
