//! Application error type and its HTML rendering.
//!
//! Every service returns [`AppError`]; handlers propagate it with `?` and the
//! [`IntoResponse`] impl turns it into a status code plus an error page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Error page rendered for every failure except [`AppError::Unauthenticated`].
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status_code: u16,
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed user input.
    #[error("{message}")]
    Validation { message: String },

    /// Short code already taken.
    #[error("{message}")]
    Conflict { message: String },

    /// Missing, unknown or expired session.
    #[error("not authenticated")]
    Unauthenticated,

    /// Caller does not own the resource.
    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Identity provider exchange or profile lookup failed.
    #[error("{message}: {details}")]
    Auth { message: String, details: String },

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            details: details.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unauthenticated => StatusCode::FOUND,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Auth { .. } | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (title, message, details) = match self {
            AppError::Unauthenticated => {
                return (status, [(header::LOCATION, "/auth/login")]).into_response();
            }
            AppError::Validation { message } => ("Invalid Request", message, None),
            AppError::Conflict { message } => ("Short Code Taken", message, None),
            AppError::Forbidden { message } => ("Access Denied", message, None),
            AppError::NotFound { message } => ("Not Found", message, None),
            AppError::Auth { message, details } => {
                tracing::warn!("Authentication failed: {}: {}", message, details);
                ("Authentication Failed", message, Some(details))
            }
            AppError::Storage(e) => {
                tracing::error!("Database error: {}", e);
                (
                    "Internal Error",
                    "Something went wrong. Please try again later.".to_string(),
                    None,
                )
            }
        };

        let page = ErrorTemplate {
            status_code: status.as_u16(),
            title: title.to_string(),
            message,
            details,
        };

        (status, page).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        AppError::bad_request(format!("Invalid form fields: {fields}"))
    }
}
