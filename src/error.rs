//! Error types for the SQLite Row Inspector.
//!
//! This module defines all error types using `thiserror`. The inspector has a
//! two-tier taxonomy: opening the database or reading its catalog is fatal,
//! while any failure scoped to a single candidate table means "skip it".

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Connection failed: {message}")]
    Connection { message: String, suggestion: String },

    #[error("Catalog query failed: {message}")]
    Catalog { message: String },

    #[error("Query failed: {message}")]
    Query {
        message: String,
        /// SQLite result code, e.g. "1" for a generic SQL error
        code: Option<String>,
    },
}

impl InspectError {
    /// Create a connection error with a helpful suggestion.
    pub fn connection(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a query error with an optional SQLite result code.
    pub fn query(message: impl Into<String>, code: Option<String>) -> Self {
        Self::Query {
            message: message.into(),
            code,
        }
    }

    /// Get the suggestion for this error, if available.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Connection { suggestion, .. } => Some(suggestion),
            _ => None,
        }
    }

    /// Whether the underlying failure is "the table does not exist".
    ///
    /// SQLite reports a missing table as a generic SQL error (primary result
    /// code 1) with a "no such table" message, so the message is the only
    /// reliable discriminator.
    pub fn is_missing_table(&self) -> bool {
        match self {
            Self::Query { message, .. } => message.contains("no such table"),
            _ => false,
        }
    }
}

/// Convert sqlx errors to InspectError.
impl From<sqlx::Error> for InspectError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(msg) => InspectError::connection(
                msg.to_string(),
                "Check the database path points at a SQLite file",
            ),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.to_string());
                InspectError::query(db_err.message().to_string(), code)
            }
            sqlx::Error::Io(io_err) => InspectError::connection(
                format!("I/O error: {}", io_err),
                "Check the file exists and is readable",
            ),
            sqlx::Error::PoolClosed => InspectError::connection(
                "Connection pool is closed",
                "Reopen the database",
            ),
            sqlx::Error::PoolTimedOut => InspectError::connection(
                "Timed out acquiring a connection",
                "Check that no other process holds an exclusive lock",
            ),
            sqlx::Error::ColumnIndexOutOfBounds { index, len } => InspectError::query(
                format!("Column index {} out of bounds (len: {})", index, len),
                None,
            ),
            sqlx::Error::ColumnDecode { index, source } => InspectError::query(
                format!("Failed to decode column {}: {}", index, source),
                None,
            ),
            _ => InspectError::query(format!("Unknown database error: {}", err), None),
        }
    }
}

/// Result type alias for inspector operations.
pub type InspectResult<T> = Result<T, InspectError>;
