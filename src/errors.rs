//! Unified error type for the deed drafting service.
//!
//! Every failure is scoped to the single request that triggered it: validation
//! failures carry the full report so the form can be corrected and resubmitted,
//! persistence and export failures carry the underlying message.

use crate::core::validation::ValidationReport;
use thiserror::Error;

/// All errors produced by the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// File system or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A date that should have been validated could not be parsed
    #[error("Invalid date: {value}")]
    InvalidDate {
        /// The offending raw input
        value: String,
    },

    /// No document with this id exists
    #[error("Document {id} not found")]
    DocumentNotFound {
        /// Requested document id
        id: i64,
    },

    /// An update tried to change the type of a stored document
    #[error("Document is a {expected}, cannot replace it with a {found}")]
    KindMismatch {
        /// Kind stored in the database
        expected: String,
        /// Kind of the submitted form
        found: String,
    },

    /// The submitted form failed validation
    #[error("Validation failed in {} section(s)", .0.errors.len())]
    Validation(ValidationReport),

    /// A stored row could not be mapped back into a form
    #[error("Stored document is corrupt: {message}")]
    Corrupt {
        /// What could not be mapped
        message: String,
    },

    /// HTTP server failure
    #[error("Server error: {message}")]
    Server {
        /// Human-readable description
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
