//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    response::Response,
};

use super::found;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its Discord invite.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Lookup is case-insensitive. Expired codes behave as if they never existed.
///
/// # Response
///
/// - `302 Found` with `Location` set to the invite URL
/// - `404 Not Found` error page for unknown or expired codes
pub async fn redirect_handler(
    State(st): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let url = st.link_service.resolve(&code).await?;

    Ok(found(&url))
}
