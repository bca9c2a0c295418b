//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the SQLite repositories in `crate::infrastructure::persistence`.
//! Mock implementations are generated via `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Identity store
//! - [`SessionRepository`] - Session store
//! - [`MappingRepository`] - Short code store
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod mapping_repository;
pub mod session_repository;
pub mod user_repository;

pub use mapping_repository::MappingRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
