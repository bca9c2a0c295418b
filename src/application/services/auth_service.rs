//! Authentication service: OAuth callback, sessions and logout.

use rand::RngCore;
use std::sync::Arc;

use crate::domain::entities::{NewSession, NewUser, Session, User};
use crate::domain::identity::IdentityProvider;
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;

/// Number of random bytes in a session id (hex-encoded to 64 characters).
const SESSION_ID_BYTES: usize = 32;

/// Result of a completed login: the refreshed user and their new session.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: User,
    pub session: Session,
}

/// Service for signing users in through the identity provider and tracking
/// their sessions.
///
/// Session ids are 256-bit random tokens. Expired sessions are not deleted,
/// only ignored by [`AuthService::current_user`].
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    provider: Arc<dyn IdentityProvider>,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    /// Creates a new authentication service.
    pub fn new(users: Arc<U>, sessions: Arc<S>, provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            users,
            sessions,
            provider,
        }
    }

    /// Returns the provider URL that starts the login flow.
    pub fn authorize_url(&self) -> String {
        self.provider.authorize_url()
    }

    /// Completes the OAuth callback.
    ///
    /// Exchanges `code` for a token, fetches the profile, upserts the user and
    /// opens a new session for them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Auth`] if the code is missing, or if the token
    /// exchange or profile request fails.
    /// Returns [`AppError::Storage`] if the user or session cannot be saved.
    pub async fn complete_login(&self, code: Option<&str>) -> Result<SignedIn, AppError> {
        let code = code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                AppError::auth(
                    "No authorization code received",
                    "Please try logging in again.",
                )
            })?;

        let token = self
            .provider
            .exchange_code(code)
            .await
            .map_err(|e| AppError::auth("Failed to get access token", e.to_string()))?;

        let profile = self
            .provider
            .fetch_profile(&token)
            .await
            .map_err(|e| AppError::auth("Failed to get user data", e.to_string()))?;

        let user = self
            .users
            .upsert(NewUser {
                id: profile.id,
                username: profile.username,
                avatar: profile.avatar,
                discriminator: profile.discriminator,
            })
            .await?;

        let session = self.create_session(&user.id).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User signed in");

        Ok(SignedIn { user, session })
    }

    /// Opens a new 30-day session for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn create_session(&self, user_id: &str) -> Result<Session, AppError> {
        let session = NewSession::starting_now(generate_session_id(), user_id.to_string());
        self.sessions.create(session).await
    }

    /// Resolves the user behind a session cookie value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthenticated`] if the cookie is absent, or the
    /// session is unknown or expired.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn current_user(&self, session_id: Option<&str>) -> Result<User, AppError> {
        let session_id = session_id
            .filter(|id| !id.is_empty())
            .ok_or(AppError::Unauthenticated)?;

        self.sessions
            .find_user(session_id)
            .await?
            .ok_or(AppError::Unauthenticated)
    }

    /// Ends a session. Failures are logged and swallowed.
    pub async fn logout(&self, session_id: &str) {
        match self.sessions.delete(session_id).await {
            Ok(true) => tracing::debug!("Session deleted"),
            Ok(false) => tracing::debug!("Logout for unknown session"),
            Err(e) => tracing::warn!("Failed to delete session: {}", e),
        }
    }
}

/// Generates a random 256-bit session id as 64 lowercase hex characters.
fn generate_session_id() -> String {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
