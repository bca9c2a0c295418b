//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`User`] - A Discord account that has signed in at least once
//! - [`Session`] - An opaque login token bound to a user
//! - [`Mapping`] - A short code pointing at a Discord invite
//!
//! Entities that are inserted have a matching `New*` struct carrying only the
//! caller-supplied fields.

pub mod mapping;
pub mod session;
pub mod user;

pub use mapping::{Mapping, NewMapping};
pub use session::{NewSession, SESSION_TTL_DAYS, Session};
pub use user::{NewUser, User};
