//! Utility functions for input validation and request handling.
//!
//! - [`short_code`] - Short code normalization and validation
//! - [`invite_url`] - Discord invite allow-list
//! - [`extract_domain`] - Host and subdomain extraction from HTTP headers
//! - [`session_cookie`] - Session cookie parsing and construction
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod extract_domain;
pub mod invite_url;
pub mod session_cookie;
pub mod short_code;
