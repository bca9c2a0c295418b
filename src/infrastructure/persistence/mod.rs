//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Timestamps are stored as Unix epoch seconds.
//!
//! # Repositories
//!
//! - [`SqliteUserRepository`] - Identity store
//! - [`SqliteSessionRepository`] - Session store
//! - [`SqliteMappingRepository`] - Short code store

pub mod sqlite_mapping_repository;
pub mod sqlite_session_repository;
pub mod sqlite_user_repository;

pub use sqlite_mapping_repository::SqliteMappingRepository;
pub use sqlite_session_repository::SqliteSessionRepository;
pub use sqlite_user_repository::SqliteUserRepository;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

/// Opens a connection pool, creating the database file if it does not exist.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect_with(options)
        .await
}

/// Migrations embedded from `./migrations` at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies any pending embedded migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Embedded migrations not yet recorded as applied, as `"<version> <description>"`.
///
/// A database that was never migrated has no `_sqlx_migrations` table, in
/// which case every migration is pending. Any other failure is returned.
pub async fn pending_migrations(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let tracked = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;

    let applied: HashSet<i64> = if tracked > 0 {
        sqlx::query_scalar::<_, i64>("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect()
    } else {
        HashSet::new()
    };

    Ok(MIGRATOR
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .map(|m| format!("{} {}", m.version, m.description))
        .collect())
}

pub(crate) fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

pub(crate) fn from_timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
