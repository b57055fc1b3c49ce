//! MySQL implementation of the UserRepository trait.
//!
//! Stores user rows including signup reservations (empty password hash,
//! inactive). Rows are never deleted by the credential engine.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kg_core::domain::entities::user::User;
use kg_core::errors::DomainError;
use kg_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid user UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::database(format!("Failed to get username: {}", e)))?,
            password_hash: row.try_get("password_hash").map_err(|e| {
                DomainError::database(format!("Failed to get password_hash: {}", e))
            })?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| DomainError::database(format!("Failed to get is_active: {}", e)))?,
            is_admin: row
                .try_get("is_admin")
                .map_err(|e| DomainError::database(format!("Failed to get is_admin: {}", e)))?,
            department: row
                .try_get("department")
                .map_err(|e| DomainError::database(format!("Failed to get department: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, username, password_hash, is_active, is_admin,
                   department, created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find user by id: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, username, password_hash, is_active, is_admin,
                   department, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find user by email: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        // Upsert keyed by id; the unique index on email rejects a second
        // insert for an address that another row already holds.
        let query = r#"
            INSERT INTO users (
                id, email, username, password_hash, is_active, is_admin,
                department, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                username = VALUES(username),
                password_hash = VALUES(password_hash),
                is_active = VALUES(is_active),
                is_admin = VALUES(is_admin),
                department = VALUES(department),
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.is_admin)
            .bind(&user.department)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to save user: {}", e)))?;

        Ok(user)
    }
}
