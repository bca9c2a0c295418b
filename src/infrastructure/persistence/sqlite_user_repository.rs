//! SQLite implementation of the user repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::{from_timestamp, now_timestamp};
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
pub(super) struct UserRow {
    id: String,
    username: String,
    avatar: Option<String>,
    discriminator: String,
    created_at: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            avatar: row.avatar,
            discriminator: row.discriminator,
            created_at: from_timestamp(row.created_at),
        }
    }
}

/// SQLite repository for user identity records.
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn upsert(&self, user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username, avatar, discriminator, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                username = excluded.username,
                avatar = excluded.avatar,
                discriminator = excluded.discriminator
            RETURNING id, username, avatar, discriminator, created_at
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.avatar)
        .bind(&user.discriminator)
        .bind(now_timestamp())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
