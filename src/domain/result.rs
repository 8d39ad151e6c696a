//! Result type alias for odonto
//!
//! This module provides a convenient Result type alias that uses OdontoError
//! as the error type.

use super::errors::OdontoError;

/// Result type alias for odonto operations
///
/// This is a convenience type alias that uses `OdontoError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use odonto::domain::result::Result;
/// use odonto::domain::errors::OdontoError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(OdontoError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, OdontoError>;
