//! Response types shared with the transport layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic acknowledgement payload
///
/// Response body produced by the transport layer for operations that
/// deliberately return the same response regardless of outcome (e.g.
/// password-reset requests), so the payload carries no signal about
/// whether the target resource exists. The engine itself never
/// constructs one; it returns `Option`/errors and leaves the uniform
/// acknowledgement to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable detail message
    pub detail: String,
}

impl MessageResponse {
    /// Create a new acknowledgement with the given detail message
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Unified error response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}
