//! Top-level router combining pages, OAuth and redirects.
//!
//! # Route Structure
//!
//! - `GET  /`, `/dashboard`  - Landing page / dashboard (session optional)
//! - `GET|POST /register`    - Register a short code (session required)
//! - `POST /delete`          - Delete an owned short code (session required)
//! - `GET  /auth/*`          - Discord OAuth login, callback, logout
//! - `GET  /{code}`          - Short link redirect (public)
//! - `/assets/*`             - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Request spans with status and latency
//! - **Subdomain** - `{code}.{domain}` hosts redirect before routing
//! - **Session** - Cookie resolution on page routes, guard on protected ones
//! - **Path normalization** - Trailing slash handling

use axum::{Router, middleware, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::web;
use crate::web::handlers::redirect_handler;
use crate::web::middleware::{subdomain, tracing};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `assets_dir` - directory served under `/assets`
pub fn app_router(state: AppState, assets_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, assets_dir))
}

/// Same as [`app_router`] without trailing-slash normalization.
pub fn router(state: AppState, assets_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::page_routes(state.clone()))
        .merge(web::routes::auth_routes())
        .route("/{code}", get(redirect_handler))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            subdomain::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
