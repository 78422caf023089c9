//! Custom error types for tally-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tally-cli operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Ledger storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted row that no longer parses (bad date, amount, or category)
    #[error("Corrupt ledger row {row}: {field} '{value}' could not be parsed")]
    CorruptRow {
        /// 1-based data row number (header excluded)
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Validation errors for user-entered data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Recoverable interactive input failures (retry budget exhausted)
    #[error("Input error: {0}")]
    Input(String),

    /// The input stream closed; nothing further can be asked
    #[error("Input stream closed")]
    InputClosed,
}

impl TallyError {
    /// Create a corrupt-row error for an unparseable date cell
    pub fn bad_date(row: usize, value: impl Into<String>) -> Self {
        Self::CorruptRow {
            row,
            field: "date",
            value: value.into(),
        }
    }

    /// Create a corrupt-row error for an unparseable amount cell
    pub fn bad_amount(row: usize, value: impl Into<String>) -> Self {
        Self::CorruptRow {
            row,
            field: "amount",
            value: value.into(),
        }
    }

    /// Create a corrupt-row error for an unrecognized category cell
    pub fn bad_category(row: usize, value: impl Into<String>) -> Self {
        Self::CorruptRow {
            row,
            field: "category",
            value: value.into(),
        }
    }

    /// Check if this error describes a corrupt ledger row
    pub fn is_corrupt_row(&self) -> bool {
        matches!(self, Self::CorruptRow { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for tally-cli operations
pub type TallyResult<T> = Result<T, TallyError>;
