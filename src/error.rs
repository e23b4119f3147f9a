//! Custom error types for the finance ledger
//!
//! Validation failures are always recoverable: the ledger is left untouched
//! and the caller decides how to report them.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Transaction kind is neither income nor expense
    #[error("Invalid transaction type: {0}")]
    InvalidKind(String),

    /// Category is not part of the taxonomy for the requested kind
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Amount is unparseable or outside the allowed range
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Month period could not be parsed
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Check if this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidKind(_)
                | Self::InvalidCategory(_)
                | Self::InvalidAmount(_)
                | Self::InvalidDate(_)
                | Self::InvalidPeriod(_)
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
