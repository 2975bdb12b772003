//! Error types for the HR Reporting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The computation layer itself is total over well-formed snapshots; errors
//! arise only at the configuration and request-validation boundaries.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the HR Reporting Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hr_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A report was requested over an inverted date range.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// The requested start of the range.
        from: NaiveDate,
        /// The requested end of the range.
        to: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
