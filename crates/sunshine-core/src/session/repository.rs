//! Session identity repository trait.
//!
//! Defines the interface for identity persistence. Identity is
//! session-scoped: it must survive page reloads within one browser
//! session, never across sessions. Implementations that lose their backing
//! storage degrade to in-memory state instead of failing the conversation.

use super::model::SessionIdentity;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the visitor's session identity.
///
/// Decouples the orchestrator from the storage mechanism so tests can
/// inject a fake. Write-once semantics for the display name are enforced
/// by the orchestrator, not by implementations of this trait.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Reads the current identity, if one was stored this session.
    async fn get(&self) -> Option<SessionIdentity>;

    /// Stores the identity, replacing any previous value.
    ///
    /// Implementations backed by unavailable storage keep the value in
    /// memory and return `Ok(())`; degradation is not an error.
    async fn save(&self, identity: &SessionIdentity) -> Result<()>;

    /// Removes the stored identity (the "start over" action).
    async fn clear(&self) -> Result<()>;
}
