//! Error types for Tally.

use thiserror::Error;

/// Common error type for Tally.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Database error.
    ///
    /// Generic database error wrapping failures from the storage backend.
    /// Errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Unique-constraint violation.
    #[error("{0} already exists")]
    Duplicate(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for TallyError {
    fn from(e: sqlx::Error) -> Self {
        TallyError::Database(e.to_string())
    }
}

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;
