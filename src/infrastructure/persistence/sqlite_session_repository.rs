//! SQLite implementation of the session repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::sqlite_user_repository::UserRow;
use super::{from_timestamp, now_timestamp};
use crate::domain::entities::{NewSession, Session, User};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// SQLite repository for login sessions.
///
/// `find_user` joins `sessions` with `users` and filters expired rows in SQL,
/// so an expired session behaves exactly like a missing one.
pub struct SqliteSessionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn create(&self, session: NewSession) -> Result<Session, AppError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, created_at, expires_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&session.id)
        .bind(&session.user_id)
        .bind(session.created_at.timestamp())
        .bind(session.expires_at.timestamp())
        .execute(self.pool.as_ref())
        .await?;

        Ok(Session {
            id: session.id,
            user_id: session.user_id,
            created_at: from_timestamp(session.created_at.timestamp()),
            expires_at: from_timestamp(session.expires_at.timestamp()),
        })
    }

    async fn find_user(&self, session_id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT u.id, u.username, u.avatar, u.discriminator, u.created_at
            FROM users u
            JOIN sessions s ON u.id = s.user_id
            WHERE s.id = ? AND s.expires_at > ?
            "#,
        )
        .bind(session_id)
        .bind(now_timestamp())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, session_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(session_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now_timestamp())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions WHERE expires_at > ?")
                .bind(now_timestamp())
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}
