//! Repository trait for short code mappings.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short code → invite URL mappings.
///
/// Codes are passed in already normalized (trimmed, lowercase); the
/// repository compares them verbatim.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Creates a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists, even
    /// when the existing row has expired.
    ///
    /// Returns [`AppError::Storage`] on other database errors.
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Finds a mapping by short code, treating expired rows as absent.
    async fn find_active(&self, short_code: &str) -> Result<Option<Mapping>, AppError>;

    /// Returns the owner of a short code, expired or not.
    async fn find_owner(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Lists the owner's non-expired mappings, newest first.
    async fn list_active_by_owner(&self, owner_id: &str) -> Result<Vec<Mapping>, AppError>;

    /// Deletes the mapping only if it belongs to `owner_id`.
    ///
    /// Returns the number of rows removed (0 or 1).
    async fn delete_owned(&self, short_code: &str, owner_id: &str) -> Result<u64, AppError>;

    /// Deletes every expired mapping and returns how many were removed.
    async fn purge_expired(&self) -> Result<u64, AppError>;

    /// Counts mappings that have not expired.
    async fn count_active(&self) -> Result<i64, AppError>;
}
