//! Credential error taxonomy
//!
//! Several operations deliberately collapse distinct failure causes into a
//! single variant. `InvalidCredentials` covers unknown email, wrong
//! password and inactive account; `InvalidOrExpired` covers wrong, expired
//! and already-used codes and tokens. The messages are stable so the
//! transport layer cannot accidentally leak which case occurred.

use kg_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Credential and token lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// An active account already holds this email
    #[error("User already exists")]
    AlreadyExists,

    /// Unknown email, wrong password or inactive account
    #[error("Email or password is incorrect")]
    InvalidCredentials,

    /// Wrong, expired or already-used code, reset token or refresh token
    #[error("Invalid or expired code")]
    InvalidOrExpired,

    /// Bad, expired or malformed bearer token, or unresolvable subject
    #[error("Could not validate credentials")]
    Unauthenticated,

    /// Direct id lookup failed (never used in anti-enumeration paths)
    #[error("{resource} not found")]
    NotFound { resource: String },
}

impl CredentialError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            CredentialError::AlreadyExists => "ALREADY_EXISTS",
            CredentialError::InvalidCredentials => "INVALID_CREDENTIALS",
            CredentialError::InvalidOrExpired => "INVALID_OR_EXPIRED",
            CredentialError::Unauthenticated => "UNAUTHENTICATED",
            CredentialError::NotFound { .. } => "NOT_FOUND",
        }
    }
}

impl From<CredentialError> for ErrorResponse {
    fn from(err: CredentialError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}
