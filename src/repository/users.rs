use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::UserStore;
use crate::error::AppError;
use crate::models::User;

/// Postgres code for a unique-constraint violation, raised by the index on
/// `users.username`.
const UNIQUE_VIOLATION: &str = "23505";

/// Postgres-backed user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, username, password_hash, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // The constraint is the authoritative duplicate guard; a lost
            // check-then-insert race lands here.
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                AppError::DuplicateUser
            }
            other => AppError::from(other),
        })
    }

    async fn user_exists(&self, username: &str) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, i32>("SELECT 1 FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
