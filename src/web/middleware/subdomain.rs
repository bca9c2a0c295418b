//! Subdomain short links: `597.drop-reg.cc` redirects like `drop-reg.cc/597`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::state::AppState;
use crate::utils::extract_domain::{extract_host, extract_subdomain};
use crate::web::handlers::found;

/// Short-circuits requests whose host carries a short code.
///
/// The path is ignored for such hosts. Everything else passes through to the
/// router untouched.
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let code = extract_host(req.headers())
        .and_then(|host| extract_subdomain(&host, st.base_domain.as_deref()));

    let Some(code) = code else {
        return next.run(req).await;
    };

    tracing::debug!(code = %code, "Resolving subdomain short link");

    match st.link_service.resolve(&code).await {
        Ok(url) => found(&url),
        Err(e) => e.into_response(),
    }
}
