//! Web-specific middleware.
//!
//! - [`tracing`] - Request spans and latency logging
//! - [`web_auth`] - Session cookie resolution and protected-route guard
//! - [`subdomain`] - `{code}.{domain}` redirects

pub mod subdomain;
pub mod tracing;
pub mod web_auth;
