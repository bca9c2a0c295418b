//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the identity provider trait, and
//! give the web handlers a small API that already speaks [`crate::AppError`].
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Resolve, register, list and delete short codes
//! - [`services::auth_service::AuthService`] - Login callback, sessions and logout

pub mod services;
