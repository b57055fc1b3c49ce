//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the KeyGate backend.
//! It provides the concrete MySQL implementations of the credential store
//! repositories defined in `kg_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL implementations using SQLx, plus the connection
//!   pool wrapper
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use kg_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

/// Initialize the database pool from environment configuration
///
/// Loads `.env` if present, reads `DATABASE_URL` and the pool tuning
/// variables, and connects.
#[cfg(feature = "mysql")]
pub async fn initialize() -> Result<database::DatabasePool, InfrastructureError> {
    dotenvy::dotenv().ok();

    let config = kg_shared::config::DatabaseConfig::from_env();
    tracing::info!(max_connections = config.max_connections, "Connecting to database");

    let pool = database::DatabasePool::new(config).await?;
    tracing::info!("Database pool initialized");

    Ok(pool)
}
