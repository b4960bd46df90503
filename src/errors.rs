//! Unified error types for the finances crate.
//!
//! Business rule violations travel as [`Error::Validation`] and are safe to show to a user.
//! Store failures travel as [`Error::Database`] exactly as `SeaORM` reported them.

use crate::core::validation::ValidationError;
use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// An entry broke one of the validation rules; carries the first violation found
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Any failure coming from the entry store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A status or type name that does not match any known variant
    #[error("Invalid {kind}: {value}")]
    InvalidEnum {
        /// Which enumeration was being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the validation violation if this error is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(violation) => Some(violation),
            _ => None,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
