#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use drop_reg::domain::identity::{AccessToken, IdentityError, IdentityProvider, Profile};
use drop_reg::routes::router;
use drop_reg::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_DOMAIN: &str = "drop-reg.cc";
pub const AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize?client_id=test";

/// Identity provider accepting codes of the form `code-<user id>`.
///
/// The code is exchanged for `token-<user id>`, which resolves to a profile
/// with username `user-<user id>`. Any other code or token is rejected.
pub struct FakeIdentityProvider;

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    fn authorize_url(&self) -> String {
        AUTHORIZE_URL.to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, IdentityError> {
        code.strip_prefix("code-")
            .map(|id| AccessToken(format!("token-{id}")))
            .ok_or_else(|| IdentityError::Exchange("400 Bad Request: invalid_grant".to_string()))
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile, IdentityError> {
        token
            .as_str()
            .strip_prefix("token-")
            .map(|id| Profile {
                id: id.to_string(),
                username: format!("user-{id}"),
                discriminator: "0".to_string(),
                avatar: None,
            })
            .ok_or_else(|| IdentityError::Profile("401 Unauthorized".to_string()))
    }
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        pool,
        Arc::new(FakeIdentityProvider),
        Some(TEST_DOMAIN.to_string()),
        format!("https://{TEST_DOMAIN}"),
        false,
    )
}

pub fn create_test_app(pool: SqlitePool) -> Router {
    router(create_test_state(pool), "assets")
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(create_test_app(pool)).unwrap()
}

pub async fn create_test_user(pool: &SqlitePool, id: &str) {
    sqlx::query(
        "INSERT INTO users (id, username, avatar, discriminator, created_at) VALUES (?, ?, NULL, '0', ?)",
    )
    .bind(id)
    .bind(format!("user-{id}"))
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a session for `user_id` that expires `ttl` from now (negative for
/// an already expired one) and returns its id.
pub async fn create_test_session(pool: &SqlitePool, user_id: &str, ttl: Duration) -> String {
    let session_id = format!("{:0>64}", format!("{user_id}{}", ttl.num_seconds().abs()));
    let now = Utc::now();

    sqlx::query("INSERT INTO sessions (id, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)")
        .bind(&session_id)
        .bind(user_id)
        .bind(now.timestamp())
        .bind((now + ttl).timestamp())
        .execute(pool)
        .await
        .unwrap();

    session_id
}

/// Creates a user with a 30-day session and returns the `Cookie` header value.
pub async fn sign_in(pool: &SqlitePool, user_id: &str) -> String {
    create_test_user(pool, user_id).await;
    let session_id = create_test_session(pool, user_id, Duration::days(30)).await;
    format!("session_id={session_id}")
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str, owner_id: &str) {
    sqlx::query(
        "INSERT INTO url_mappings (short_code, discord_url, created_at, expires_at, owner_id) VALUES (?, ?, ?, NULL, ?)",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now().timestamp())
    .bind(owner_id)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_expired_mapping(pool: &SqlitePool, code: &str, url: &str, owner_id: &str) {
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO url_mappings (short_code, discord_url, created_at, expires_at, owner_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(code)
    .bind(url)
    .bind((now - Duration::days(2)).timestamp())
    .bind((now - Duration::hours(1)).timestamp())
    .bind(owner_id)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}
