//! MySQL implementation of the VerificationCodeRepository trait.
//!
//! Codes are scoped by (email, purpose) and only their bcrypt digests are
//! stored. Records are invalidated in place, never deleted.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kg_core::domain::entities::verification_code::{CodePurpose, VerificationCode};
use kg_core::errors::DomainError;
use kg_core::repositories::VerificationCodeRepository;

/// MySQL implementation of VerificationCodeRepository
pub struct MySqlVerificationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL verification code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a VerificationCode entity
    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<VerificationCode, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let purpose: String = row
            .try_get("purpose")
            .map_err(|e| DomainError::database(format!("Failed to get purpose: {}", e)))?;

        Ok(VerificationCode {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid code UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            code_hash: row
                .try_get("code_hash")
                .map_err(|e| DomainError::database(format!("Failed to get code_hash: {}", e)))?,
            purpose: CodePurpose::from_str(&purpose)
                .map_err(|e| DomainError::database(format!("Invalid purpose: {}", e)))?,
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
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let query = r#"
            INSERT INTO verification_codes (
                id, email, code_hash, purpose, created_at, expires_at, is_used
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(&code.email)
            .bind(&code.code_hash)
            .bind(code.purpose.as_str())
            .bind(code.created_at)
            .bind(code.expires_at)
            .bind(code.is_used)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to save verification code: {}", e))
            })?;

        Ok(code)
    }

    async fn find_unused(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT id, email, code_hash, purpose, created_at, expires_at, is_used
            FROM verification_codes
            WHERE email = ? AND purpose = ? AND is_used = FALSE AND expires_at > ?
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(purpose.as_str())
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to find verification code: {}", e))
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn invalidate_all(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<usize, DomainError> {
        let query = r#"
            UPDATE verification_codes
            SET is_used = TRUE
            WHERE email = ? AND purpose = ? AND is_used = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(purpose.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to invalidate codes: {}", e))
            })?;

        Ok(result.rows_affected() as usize)
    }
}
