//! Reset token repository interface and in-memory mock.

mod mock;
mod r#trait;

pub use mock::MockResetTokenRepository;
pub use r#trait::ResetTokenRepository;
