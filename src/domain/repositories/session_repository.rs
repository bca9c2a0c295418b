//! Repository trait for login sessions.

use crate::domain::entities::{NewSession, Session, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for session tokens.
///
/// Expiry is checked at read time; expired rows stay in the table until
/// [`SessionRepository::purge_expired`] is run.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSessionRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors, including an unknown
    /// `user_id`.
    async fn create(&self, session: NewSession) -> Result<Session, AppError>;

    /// Resolves a session id to its user, ignoring expired sessions.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if the session exists and `expires_at > now`
    /// - `Ok(None)` otherwise
    async fn find_user(&self, session_id: &str) -> Result<Option<User>, AppError>;

    /// Deletes a session. Returns `Ok(true)` if a row was removed.
    async fn delete(&self, session_id: &str) -> Result<bool, AppError>;

    /// Deletes every expired session and returns how many were removed.
    async fn purge_expired(&self) -> Result<u64, AppError>;

    /// Counts sessions that have not expired yet.
    async fn count_active(&self) -> Result<i64, AppError>;
}
