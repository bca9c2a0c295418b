//! # drop-reg
//!
//! Short links for Discord invites: `drop-reg.cc/597` (or `597.drop-reg.cc`)
//! redirects to `https://discord.gg/...`. Users sign in with Discord, register
//! short codes and manage the ones they own. Built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, identity provider trait
//! - **Application Layer** ([`application`]) - Link and authentication services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories, Discord client
//! - **Web Layer** ([`web`]) - HTML pages, OAuth endpoints, redirects and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DISCORD_CLIENT_ID="..."
//! export DISCORD_CLIENT_SECRET="..."
//! export DOMAIN="drop-reg.cc"   # optional
//!
//! # Migrations are applied on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService, SignedIn};
    pub use crate::domain::entities::{Mapping, NewMapping, Session, User};
    pub use crate::domain::identity::{AccessToken, IdentityError, IdentityProvider, Profile};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
