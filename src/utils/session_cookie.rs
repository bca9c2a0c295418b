//! Session cookie parsing and `Set-Cookie` construction.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use chrono::{DateTime, Utc};

/// Name of the cookie holding the session id.
pub const SESSION_COOKIE: &str = "session_id";

/// Reads the session id from the request's `Cookie` header(s).
///
/// Handles multiple cookies per header by splitting on semicolons and
/// ignoring everything but `session_id`. Empty values are treated as absent.
pub fn read_session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// Builds the `Set-Cookie` value that stores a session id until `expires_at`.
///
/// The cookie is `HttpOnly`, `SameSite=Lax`, scoped to `/`, and `Secure`
/// when `secure` is set.
pub fn session_cookie(session_id: &str, expires_at: DateTime<Utc>, secure: bool) -> HeaderValue {
    build(session_id, expires_at, secure)
}

/// Builds the `Set-Cookie` value that makes the browser drop the session.
///
/// Sets an empty value with an `Expires` date at the Unix epoch.
pub fn clear_session_cookie(secure: bool) -> HeaderValue {
    build("", DateTime::<Utc>::UNIX_EPOCH, secure)
}

fn build(value: &str, expires_at: DateTime<Utc>, secure: bool) -> HeaderValue {
    let mut cookie = format!(
        "{SESSION_COOKIE}={value}; Path=/; Expires={}; HttpOnly; SameSite=Lax",
        expires_at.format("%a, %d %b %Y %H:%M:%S GMT")
    );
    if secure {
        cookie.push_str("; Secure");
    }

    // Session ids are hex, so the value is always visible ASCII.
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
}
