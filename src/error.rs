//! Error types for the Hours and Overtime Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the operational edges of the engine: configuration persistence,
//! configuration validation, and targeted record lookup.
//!
//! Row-level calculation failures (malformed punch times, inconsistent
//! punch sequences) are deliberately NOT errors: the row evaluator converts
//! them into error-code outcomes carried on the record itself, so a single
//! bad row never aborts a whole-table pass.

use thiserror::Error;

/// The main error type for the Hours and Overtime Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/config.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/config.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found or could not be read.
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

    /// Configuration file could not be written.
    #[error("Failed to write configuration file '{path}': {message}")]
    ConfigWriteError {
        /// The path to the file that failed to write.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A configuration value was outside its permitted range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A record index was outside the bounds of the collection.
    #[error("Record not found at index {index}")]
    RecordNotFound {
        /// The index that was requested.
        index: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
