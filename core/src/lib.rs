//! # KeyGate Core
//!
//! Core credential and token lifecycle engine for the KeyGate backend.
//! This crate contains domain entities, the lifecycle services, repository
//! interfaces, and error types that form the foundation of the system.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Claims, CodePurpose, RefreshToken, ResetToken, TokenPair, User, VerificationCode, CODE_LENGTH,
};
pub use domain::value_objects::{AuthResponse, CodeDelivery, ResetTokenGrant, UserProfile};
pub use errors::{CredentialError, DomainError, DomainResult};
pub use repositories::{
    MockRefreshTokenRepository, MockResetTokenRepository, MockUserRepository,
    MockVerificationCodeRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
    VerificationCodeRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, SecretHasher, SessionGuard, TokenService, TokenServiceConfig,
};
