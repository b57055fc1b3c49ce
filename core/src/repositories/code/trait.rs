//! Verification code repository trait.

use async_trait::async_trait;

use crate::domain::entities::verification_code::{CodePurpose, VerificationCode};
use crate::errors::DomainError;

/// Repository trait for VerificationCode persistence operations
///
/// Codes are scoped by (email, purpose). Records are invalidated, never
/// deleted, so consumed codes leave an audit trail.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Save a new verification code record
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError>;

    /// Find the newest unused, unexpired code for an email and purpose
    ///
    /// At most one such code is authoritative at any time; issuing a new
    /// code invalidates all prior unused ones first.
    async fn find_unused(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Mark every unused code for an email and purpose as used
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of codes invalidated
    async fn invalidate_all(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<usize, DomainError>;
}
