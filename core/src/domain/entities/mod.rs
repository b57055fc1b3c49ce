//! Domain entities representing the credential records.

pub mod reset_token;
pub mod token;
pub mod user;
pub mod verification_code;

// Re-export commonly used types
pub use reset_token::ResetToken;
pub use token::{Claims, RefreshToken, TokenPair};
pub use user::User;
pub use verification_code::{CodePurpose, VerificationCode, CODE_LENGTH};
