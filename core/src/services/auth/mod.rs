//! Credential lifecycle engine: signup, login, refresh rotation and
//! password recovery.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
