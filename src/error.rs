//! Error types for the Training Report Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration and
//! processing a transcript table.

use thiserror::Error;

/// The main error type for the Training Report Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use training_report_engine::error::EngineError;
///
/// let error = EngineError::MissingColumn {
///     column: "Training Title".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required input column is missing: Training Title");
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

    /// A tier pattern failed to compile as a regular expression.
    #[error("Invalid {tier} pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The tier the pattern belongs to.
        tier: String,
        /// The pattern text that failed to compile.
        pattern: String,
        /// A description of the compile error.
        message: String,
    },

    /// A required column is absent from the input table.
    #[error("Required input column is missing: {column}")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
