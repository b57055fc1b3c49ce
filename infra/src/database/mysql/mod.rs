//! MySQL repository implementations for the credential store.

mod code_repository_impl;
mod reset_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use code_repository_impl::MySqlVerificationCodeRepository;
pub use reset_repository_impl::MySqlResetTokenRepository;
pub use token_repository_impl::MySqlRefreshTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
