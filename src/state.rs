//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AuthService, LinkService};
use crate::domain::identity::IdentityProvider;
use crate::infrastructure::persistence::{
    SqliteMappingRepository, SqliteSessionRepository, SqliteUserRepository,
};

pub type SqliteLinkService = LinkService<SqliteMappingRepository>;
pub type SqliteAuthService = AuthService<SqliteUserRepository, SqliteSessionRepository>;

/// Services and request-independent settings, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SqliteLinkService>,
    pub auth_service: Arc<SqliteAuthService>,
    /// Domain whose direct subdomains are treated as short codes.
    pub base_domain: Option<String>,
    /// Base URL used when showing a registered short link, e.g. `https://drop-reg.cc`.
    pub public_url: String,
    pub cookie_secure: bool,
}

impl AppState {
    /// Wires the SQLite repositories and the identity provider into services.
    pub fn new(
        pool: SqlitePool,
        provider: Arc<dyn IdentityProvider>,
        base_domain: Option<String>,
        public_url: String,
        cookie_secure: bool,
    ) -> Self {
        let pool = Arc::new(pool);

        let mapping_repository = Arc::new(SqliteMappingRepository::new(pool.clone()));
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let session_repository = Arc::new(SqliteSessionRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(mapping_repository)),
            auth_service: Arc::new(AuthService::new(
                user_repository,
                session_repository,
                provider,
            )),
            base_domain,
            public_url: public_url.trim_end_matches('/').to_string(),
            cookie_secure,
        }
    }
}
