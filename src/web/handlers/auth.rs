//! Discord OAuth login, callback and logout handlers.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::found;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::session_cookie::{clear_session_cookie, read_session_id, session_cookie};

/// Query string Discord appends to the redirect URI.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    /// Set instead of `code` when the user declines, e.g. `access_denied`.
    pub error: Option<String>,
}

/// Starts the login flow.
///
/// # Endpoint
///
/// `GET /auth/login`: `302` to Discord's authorize page.
pub async fn login_handler(State(st): State<AppState>) -> Response {
    found(&st.auth_service.authorize_url())
}

/// Completes the login flow and sets the session cookie.
///
/// # Endpoint
///
/// `GET /auth/callback?code=...`: `302` to `/` with `Set-Cookie: session_id=...`.
///
/// # Errors
///
/// Returns an error page (500) if the code is missing or Discord rejects the
/// exchange or the profile request.
pub async fn callback_handler(
    State(st): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, AppError> {
    if let Some(ref error) = params.error {
        tracing::info!(error = %error, "Discord returned an authorization error");
    }

    let signed_in = st.auth_service.complete_login(params.code.as_deref()).await?;

    let cookie = session_cookie(
        &signed_in.session.id,
        signed_in.session.expires_at,
        st.cookie_secure,
    );

    Ok(redirect_home_with_cookie(cookie))
}

/// Ends the session, if any, and clears the cookie.
///
/// # Endpoint
///
/// `GET /auth/logout`: `302` to `/`. Never fails.
pub async fn logout_handler(State(st): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(session_id) = read_session_id(&headers) {
        st.auth_service.logout(&session_id).await;
    }

    redirect_home_with_cookie(clear_session_cookie(st.cookie_secure))
}

fn redirect_home_with_cookie(cookie: HeaderValue) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, HeaderValue::from_static("/")),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response()
}
