//! Repository interfaces forming the credential store contract.
//!
//! The engine holds only transient references to records during a request;
//! all durable state lives behind these traits.

pub mod code;
pub mod reset;
pub mod token;
pub mod user;

pub use code::{MockVerificationCodeRepository, VerificationCodeRepository};
pub use reset::{MockResetTokenRepository, ResetTokenRepository};
pub use token::{MockRefreshTokenRepository, RefreshTokenRepository};
pub use user::{MockUserRepository, UserRepository};
