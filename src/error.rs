//! Error types for the labor calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation functions themselves are total over their documented
//! input domain and never fail; errors only arise when loading or
//! validating statutory table configuration, or when the HTTP layer
//! rejects malformed input.

use thiserror::Error;

/// The main error type for the labor calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use clt_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A statutory table violated a structural invariant.
    #[error("Invalid statutory table: {message}")]
    InvalidTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// A request field contained invalid data.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
