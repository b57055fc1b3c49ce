//! Domain-specific error types and error handling.

mod types;

pub use types::CredentialError;

use thiserror::Error;

/// Core domain errors
///
/// Wraps the credential taxonomy and adds infrastructure variants so that
/// store-layer failures propagate distinctly from domain validation
/// failures and are never masked as credential errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// A credential validation failure, terminal for the request
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// A store-layer failure (connection loss, constraint violation)
    #[error("Database error: {message}")]
    Database { message: String },

    /// An unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Wrap a store-layer error message
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Wrap an internal error message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
