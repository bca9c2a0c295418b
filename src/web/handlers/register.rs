//! Registration form and submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use validator::Validate;

use super::UserView;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_code::short_url;
use crate::web::forms::RegisterForm;
use crate::web::middleware::web_auth::CurrentUser;

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub user: UserView,
}

/// Confirmation page after a successful registration.
#[derive(Template, WebTemplate)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub short_code: String,
    pub short_url: String,
    pub discord_url: String,
}

/// Renders the registration form.
///
/// # Endpoint
///
/// `GET /register` (signed in)
pub async fn register_form_handler(CurrentUser(user): CurrentUser) -> RegisterTemplate {
    RegisterTemplate {
        user: UserView::from(&user),
    }
}

/// Registers a short code for the signed-in user.
///
/// # Endpoint
///
/// `POST /register` (signed in), form fields `short_code` and `discord_url`.
///
/// # Errors
///
/// - 400 if a field is too long, the code is empty or unusable, or the URL is
///   not a `https://discord.gg/` invite
/// - 409 if the code is already registered
pub async fn register_handler(
    State(st): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<RegisterForm>,
) -> Result<SuccessTemplate, AppError> {
    form.validate()?;

    let mapping = st
        .link_service
        .register(&form.short_code, &form.discord_url, &user.id)
        .await?;

    Ok(SuccessTemplate {
        short_url: short_url(&st.public_url, &mapping.short_code),
        short_code: mapping.short_code,
        discord_url: mapping.discord_url,
    })
}
