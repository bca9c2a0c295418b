//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::{from_timestamp, now_timestamp};
use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    short_code: String,
    discord_url: String,
    created_at: i64,
    expires_at: Option<i64>,
    owner_id: String,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping {
            id: row.id,
            short_code: row.short_code,
            discord_url: row.discord_url,
            created_at: from_timestamp(row.created_at),
            expires_at: row.expires_at.map(from_timestamp),
            owner_id: row.owner_id,
        }
    }
}

/// SQLite repository for short code mappings.
///
/// Uniqueness of `short_code` is enforced by the table's UNIQUE constraint;
/// a violation is reported as [`AppError::Conflict`].
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (short_code, discord_url, created_at, expires_at, owner_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, short_code, discord_url, created_at, expires_at, owner_id
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.discord_url)
        .bind(now_timestamp())
        .bind(new_mapping.expires_at.map(|e| e.timestamp()))
        .bind(&new_mapping.owner_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(format!(
                    "The short code '{}' already exists",
                    new_mapping.short_code
                ))
            } else {
                AppError::Storage(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_active(&self, short_code: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, short_code, discord_url, created_at, expires_at, owner_id
            FROM url_mappings
            WHERE short_code = ? AND (expires_at IS NULL OR expires_at > ?)
            "#,
        )
        .bind(short_code)
        .bind(now_timestamp())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn find_owner(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let owner =
            sqlx::query_scalar::<_, String>("SELECT owner_id FROM url_mappings WHERE short_code = ?")
                .bind(short_code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(owner)
    }

    async fn list_active_by_owner(&self, owner_id: &str) -> Result<Vec<Mapping>, AppError> {
        let rows = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, short_code, discord_url, created_at, expires_at, owner_id
            FROM url_mappings
            WHERE owner_id = ? AND (expires_at IS NULL OR expires_at > ?)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_id)
        .bind(now_timestamp())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Mapping::from).collect())
    }

    async fn delete_owned(&self, short_code: &str, owner_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM url_mappings WHERE short_code = ? AND owner_id = ?")
            .bind(short_code)
            .bind(owner_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn purge_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM url_mappings WHERE expires_at IS NOT NULL AND expires_at <= ?",
        )
        .bind(now_timestamp())
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM url_mappings WHERE expires_at IS NULL OR expires_at > ?",
        )
        .bind(now_timestamp())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
