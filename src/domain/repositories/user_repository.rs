//! Repository trait for user identity records.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users keyed by their external provider id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user or overwrites the profile fields of an existing one.
    ///
    /// `created_at` is set on first insert and preserved afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn upsert(&self, user: NewUser) -> Result<User, AppError>;

    /// Counts all users.
    async fn count(&self) -> Result<i64, AppError>;
}
