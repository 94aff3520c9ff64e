//! Storage implementations for the Sunshine engine.
//!
//! Two scopes, two repositories: the session-scoped identity file and the
//! durable engagement file. Both front their file with an in-memory cache
//! and degrade silently when storage is unavailable.

pub mod engagement_repository;
pub mod identity_repository;
pub mod paths;

pub use engagement_repository::TomlEngagementRepository;
pub use identity_repository::{FileIdentityRepository, InMemoryIdentityRepository};
pub use paths::SunshinePaths;
