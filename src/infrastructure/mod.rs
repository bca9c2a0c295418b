//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations and pool setup
//! - [`discord`] - Discord OAuth2 client implementing the identity provider

pub mod discord;
pub mod persistence;
