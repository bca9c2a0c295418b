//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `DISCORD_CLIENT_ID` - OAuth2 application id
//! - `DISCORD_CLIENT_SECRET` - OAuth2 application secret
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://drop-reg.db`)
//! - `DOMAIN` - Public domain, used for the OAuth callback and subdomain routing
//! - `REDIRECT_URI` - Explicit OAuth callback URL (overrides the `DOMAIN` derivation)
//! - `HOST` / `PORT` - Bind address (default: `0.0.0.0:8080`)
//! - `ASSETS_DIR` - Static files served under `/assets` (default: `assets`)
//! - `COOKIE_SECURE` - Mark the session cookie `Secure` (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` / `DB_CONNECT_TIMEOUT` - Pool settings (default: 5, 30s)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite://drop-reg.db";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/auth/callback";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    /// Public domain without scheme, e.g. `drop-reg.cc`.
    pub domain: Option<String>,
    /// Explicit `REDIRECT_URI`, if set.
    pub redirect_uri_override: Option<String>,
    pub host: String,
    pub port: u16,
    pub assets_dir: String,
    pub cookie_secure: bool,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the Discord credentials are missing or `PORT` is not a number.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let discord_client_id =
            env::var("DISCORD_CLIENT_ID").context("DISCORD_CLIENT_ID must be set")?;
        let discord_client_secret =
            env::var("DISCORD_CLIENT_SECRET").context("DISCORD_CLIENT_SECRET must be set")?;

        let domain = non_empty_var("DOMAIN");
        let redirect_uri_override = non_empty_var("REDIRECT_URI");

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{v}'"))?,
            Err(_) => 8080,
        };

        let assets_dir = env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string());

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            discord_client_id,
            discord_client_secret,
            domain,
            redirect_uri_override,
            host,
            port,
            assets_dir,
            cookie_secure,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `database_url` is not a SQLite URL
    /// - `port` is zero
    /// - Discord credentials are empty
    /// - Pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if self.discord_client_id.trim().is_empty() {
            anyhow::bail!("DISCORD_CLIENT_ID must not be empty");
        }
        if self.discord_client_secret.trim().is_empty() {
            anyhow::bail!("DISCORD_CLIENT_SECRET must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// OAuth callback URL registered with Discord.
    ///
    /// `REDIRECT_URI` wins; otherwise it is derived from `DOMAIN` (plain `http`
    /// for local hosts, `https` elsewhere); otherwise the local default.
    pub fn redirect_uri(&self) -> String {
        if let Some(ref uri) = self.redirect_uri_override {
            return uri.clone();
        }

        match self.domain {
            Some(ref domain) => format!("{}/auth/callback", base_url_for(domain)),
            None => DEFAULT_REDIRECT_URI.to_string(),
        }
    }

    /// Public base URL shown on the success page, without a trailing slash.
    pub fn public_base_url(&self) -> String {
        match self.domain {
            Some(ref domain) => base_url_for(domain),
            None => format!("http://localhost:{}", self.port),
        }
    }

    /// Socket address to bind, as `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!(
            "  Domain: {}",
            self.domain.as_deref().unwrap_or("(not set, subdomain routing is open)")
        );
        tracing::info!("  OAuth redirect URI: {}", self.redirect_uri());
        tracing::info!("  Discord client id: {}", self.discord_client_id);
        tracing::info!("  Assets directory: {}", self.assets_dir);
        tracing::info!("  Secure cookies: {}", self.cookie_secure);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn base_url_for(domain: &str) -> String {
    if domain.contains("localhost") || domain.contains("127.0.0.1") {
        format!("http://{domain}")
    } else {
        format!("https://{domain}")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
