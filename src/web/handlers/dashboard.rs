//! Landing page and dashboard handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use super::UserView;
use crate::domain::entities::Mapping;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_code::short_url;
use crate::web::middleware::web_auth::MaybeUser;

/// A mapping as listed on the dashboard.
pub struct LinkRow {
    pub short_code: String,
    pub short_url: String,
    pub discord_url: String,
    /// Creation time, e.g. `Jun 1, 2025 14:05`.
    pub created: String,
}

impl LinkRow {
    fn new(mapping: Mapping, public_url: &str) -> Self {
        Self {
            short_url: short_url(public_url, &mapping.short_code),
            created: mapping.created_at.format("%b %-d, %Y %H:%M").to_string(),
            short_code: mapping.short_code,
            discord_url: mapping.discord_url,
        }
    }
}

/// Renders `templates/index.html`.
///
/// Anonymous visitors get the sign-in landing; signed-in users get their
/// links with a delete button each.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub user: Option<UserView>,
    pub links: Vec<LinkRow>,
}

/// Renders the landing page or the caller's dashboard.
///
/// # Endpoint
///
/// `GET /` and `GET /dashboard`
///
/// # Errors
///
/// Returns [`AppError::Storage`] if the caller's links cannot be loaded.
pub async fn dashboard_handler(
    State(st): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Result<IndexTemplate, AppError> {
    let Some(user) = user else {
        return Ok(IndexTemplate {
            user: None,
            links: Vec::new(),
        });
    };

    let links = st
        .link_service
        .list_for_owner(&user.id)
        .await?
        .into_iter()
        .map(|mapping| LinkRow::new(mapping, &st.public_url))
        .collect();

    Ok(IndexTemplate {
        user: Some(UserView::from(&user)),
        links,
    })
}
