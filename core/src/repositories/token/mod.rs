//! Refresh token repository interface and in-memory mock.

mod mock;
mod r#trait;

pub use mock::MockRefreshTokenRepository;
pub use r#trait::RefreshTokenRepository;
