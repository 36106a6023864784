//! Error types for the provider directory.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for directory operations.
///
/// Fetch and parse failures are kept distinct here so they can be logged
/// precisely, but the record store collapses every variant into a single
/// failed state before anything reaches the view.
///
/// # Examples
///
/// ```
/// use docfinder::domain::DirectoryError;
///
/// fn validate_config() -> Result<(), DirectoryError> {
///     Err(DirectoryError::Config("suggestion_limit must be positive".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The HTTP request could not be completed.
    ///
    /// Wraps transport-level failures (DNS, TLS, connection reset, body read).
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The feed answered with a non-success HTTP status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The response body was not a JSON array of provider objects.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A provider object was well-formed JSON but violated the record model.
    ///
    /// For example a negative or non-finite fee.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Occurs when reading a local feed file or a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A line typed at the prompt is not a known command.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// A specialized `Result` type for directory operations.
///
/// # Examples
///
/// ```
/// use docfinder::domain::Result;
///
/// fn process() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, DirectoryError>;
