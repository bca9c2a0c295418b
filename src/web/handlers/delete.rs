//! Owner-only deletion handler.

use axum::{Form, extract::State, response::Response};
use validator::Validate;

use super::found;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::DeleteForm;
use crate::web::middleware::web_auth::CurrentUser;

/// Deletes one of the caller's short codes and returns to the dashboard.
///
/// # Endpoint
///
/// `POST /delete` (signed in), form field `short_code`.
///
/// # Errors
///
/// - 400 if the code is empty
/// - 403 if the code belongs to someone else
/// - 404 if the code does not exist
pub async fn delete_handler(
    State(st): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<DeleteForm>,
) -> Result<Response, AppError> {
    form.validate()?;

    st.link_service.delete(&form.short_code, &user.id).await?;

    Ok(found("/"))
}
