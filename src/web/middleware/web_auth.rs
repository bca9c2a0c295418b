//! Cookie-based session middleware and the extractors built on it.
//!
//! [`resolve`] runs on every page route and attaches the signed-in user (if
//! any) to the request. [`require`] is layered on protected routes only and
//! turns an anonymous request into a redirect to `/auth/login`.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::session_cookie::read_session_id;

/// The signed-in user, stored in request extensions by [`resolve`].
///
/// As an extractor it rejects anonymous requests with
/// [`AppError::Unauthenticated`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// The signed-in user if there is one. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

/// Resolves the `session_id` cookie into a [`CurrentUser`] extension.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session_id=<64 hex chars>
/// ```
///
/// Missing, unknown and expired sessions leave the request anonymous.
///
/// # Errors
///
/// A storage failure during the lookup is rendered as a 500 page.
pub async fn resolve(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let session_id = read_session_id(req.headers());

    match st.auth_service.current_user(session_id.as_deref()).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
        }
        Err(AppError::Unauthenticated) => {
            if session_id.is_some() {
                tracing::debug!("Ignoring unknown or expired session cookie");
            }
        }
        Err(e) => return e.into_response(),
    }

    next.run(req).await
}

/// Rejects requests that [`resolve`] left anonymous.
///
/// # Errors
///
/// Returns [`AppError::Unauthenticated`], which redirects to `/auth/login`.
pub async fn require(req: Request, next: Next) -> Result<Response, AppError> {
    if req.extensions().get::<CurrentUser>().is_none() {
        return Err(AppError::Unauthenticated);
    }

    Ok(next.run(req).await)
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthenticated)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(
            parts.extensions.get::<CurrentUser>().map(|c| c.0.clone()),
        ))
    }
}
