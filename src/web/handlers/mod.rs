//! Request handlers for pages, forms, OAuth and redirects.

mod auth;
mod dashboard;
mod delete;
mod redirect;
mod register;

pub use auth::{callback_handler, login_handler, logout_handler};
pub use dashboard::dashboard_handler;
pub use delete::delete_handler;
pub use redirect::redirect_handler;
pub use register::{register_form_handler, register_handler};

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::entities::User;

/// `302 Found` to `location`.
///
/// `axum::response::Redirect::to` answers `303 See Other`; short links and
/// the auth flow answer `302`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// User fields shown in the page header.
pub struct UserView {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            name: user.display_name(),
            avatar_url: user.avatar_url(),
        }
    }
}
