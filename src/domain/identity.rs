//! Identity provider capability used by the authentication service.
//!
//! Three calls: where to send the browser, how to turn a callback code into a
//! token, and how to read the signed-in account.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Bearer token returned by the provider's token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Account fields granted by the `identify` scope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("token exchange rejected: {0}")]
    Exchange(String),

    #[error("profile request rejected: {0}")]
    Profile(String),

    #[error("identity provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL the browser is sent to in order to start the login flow.
    fn authorize_url(&self) -> String;

    /// Exchanges an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, IdentityError>;

    /// Fetches the profile of the account the token belongs to.
    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile, IdentityError>;
}
