//! Route tables for the browser-facing pages.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::state::AppState;
use crate::web::handlers::{
    callback_handler, dashboard_handler, delete_handler, login_handler, logout_handler,
    register_form_handler, register_handler,
};
use crate::web::middleware::web_auth;

/// Routes that require a signed-in user.
///
/// Protected via [`web_auth::require`]; anonymous callers are redirected to
/// `/auth/login`.
///
/// # Endpoints
///
/// - `GET /register` - Registration form
/// - `POST /register` - Register a short code
/// - `POST /delete` - Delete an owned short code
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/register",
            get(register_form_handler).post(register_handler),
        )
        .route("/delete", post(delete_handler))
        .route_layer(middleware::from_fn(web_auth::require))
}

/// Pages that know about the session cookie, signed in or not.
///
/// # Endpoints
///
/// - `GET /` - Landing page or dashboard
/// - `GET /dashboard` - Same as `/`
/// - everything in [`protected_routes`]
pub fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/dashboard", get(dashboard_handler))
        .merge(protected_routes())
        .route_layer(middleware::from_fn_with_state(state, web_auth::resolve))
}

/// OAuth endpoints, no session required.
///
/// # Endpoints
///
/// - `GET /auth/login` - Redirect to Discord
/// - `GET /auth/callback` - OAuth callback
/// - `GET /auth/logout` - Clear the session
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_handler))
        .route("/auth/callback", get(callback_handler))
        .route("/auth/logout", get(logout_handler))
}
