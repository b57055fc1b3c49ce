//! MySQL implementation of the ResetTokenRepository trait.
//!
//! Same compare-and-set invalidation contract as refresh tokens: the
//! guarded UPDATE's affected-row count decides which caller consumed the
//! token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kg_core::domain::entities::reset_token::ResetToken;
use kg_core::errors::DomainError;
use kg_core::repositories::ResetTokenRepository;

/// MySQL implementation of ResetTokenRepository
pub struct MySqlResetTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlResetTokenRepository {
    /// Create a new MySQL reset token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a ResetToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<ResetToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;

        Ok(ResetToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid token UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::database(format!("Invalid user UUID: {}", e)))?,
            token_digest: row
                .try_get("token_digest")
                .map_err(|e| DomainError::database(format!("Failed to get token_digest: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::database(format!("Failed to get expires_at: {}", e)))?,
            is_used: row
                .try_get("is_used")
                .map_err(|e| DomainError::database(format!("Failed to get is_used: {}", e)))?,
        })
    }
}

#[async_trait]
impl ResetTokenRepository for MySqlResetTokenRepository {
    async fn save(&self, token: ResetToken) -> Result<ResetToken, DomainError> {
        let query = r#"
            INSERT INTO reset_tokens (
                id, user_id, token_digest, created_at, expires_at, is_used
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_digest)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.is_used)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to save reset token: {}", e)))?;

        Ok(token)
    }

    async fn find_active(&self, token_digest: &str) -> Result<Option<ResetToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_digest, created_at, expires_at, is_used
            FROM reset_tokens
            WHERE token_digest = ? AND is_used = FALSE AND expires_at > ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_digest)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find reset token: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn invalidate(&self, token_digest: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE reset_tokens
            SET is_used = TRUE
            WHERE token_digest = ? AND is_used = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(token_digest)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to invalidate reset token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
