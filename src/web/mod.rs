//! Browser-facing layer.
//!
//! Server-rendered HTML pages (Askama templates from `templates/`), the
//! OAuth endpoints and the short link redirects.
//!
//! # Modules
//!
//! - [`forms`] - Form bodies and their bounds
//! - [`handlers`] - Page, form, auth and redirect handlers
//! - [`middleware`] - Tracing, session and subdomain middleware
//! - [`routes`] - Route tables

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
