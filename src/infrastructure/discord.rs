//! Discord OAuth2 client.
//!
//! Implements [`IdentityProvider`] with the authorization-code flow and the
//! `identify` scope, which grants id, username, discriminator and avatar.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::identity::{AccessToken, IdentityError, IdentityProvider, Profile};

const AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize";
const API_BASE: &str = "https://discord.com/api/v10";
const SCOPE: &str = "identify";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OAuth2 client credentials and redirect target.
#[derive(Debug, Clone)]
pub struct DiscordCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// HTTP client for Discord's OAuth2 and user endpoints.
#[derive(Clone)]
pub struct DiscordClient {
    client: Client,
    credentials: DiscordCredentials,
    api_base: String,
    authorize_url: String,
}

impl DiscordClient {
    /// Creates a client talking to the public Discord API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: DiscordCredentials) -> anyhow::Result<Self> {
        Self::with_api_base(credentials, API_BASE)
    }

    /// Creates a client against a custom API base (e.g. a local stub server).
    pub fn with_api_base(
        credentials: DiscordCredentials,
        api_base: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("drop-reg/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let authorize_url = Url::parse_with_params(
            AUTHORIZE_URL,
            &[
                ("client_id", credentials.client_id.as_str()),
                ("redirect_uri", credentials.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", SCOPE),
            ],
        )?
        .to_string();

        Ok(Self {
            client,
            credentials,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            authorize_url,
        })
    }
}

#[async_trait]
impl IdentityProvider for DiscordClient {
    fn authorize_url(&self) -> String {
        self.authorize_url.clone()
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, IdentityError> {
        let response = self
            .client
            .post(format!("{}/oauth2/token", self.api_base))
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Exchange(format!("{status}: {body}")));
        }

        let token: TokenResponse = response.json().await?;
        Ok(AccessToken(token.access_token))
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile, IdentityError> {
        let response = self
            .client
            .get(format!("{}/users/@me", self.api_base))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Profile(format!("{status}: {body}")));
        }

        Ok(response.json().await?)
    }
}
