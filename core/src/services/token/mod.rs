//! Token signer: JWT access tokens, opaque refresh tokens, reset secrets.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
