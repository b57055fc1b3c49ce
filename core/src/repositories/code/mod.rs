//! Verification code repository interface and in-memory mock.

mod mock;
mod r#trait;

pub use mock::MockVerificationCodeRepository;
pub use r#trait::VerificationCodeRepository;
