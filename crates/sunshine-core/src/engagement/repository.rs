//! Engagement state repository trait.
//!
//! This is the durable storage scope; it must never be conflated with the
//! session-scoped identity store.

use super::model::EngagementState;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for durable engagement state.
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Reads the current engagement state.
    async fn get(&self) -> EngagementState;

    /// Records that the conversion popup has been shown. One-shot: once
    /// set, the flag is never cleared.
    async fn mark_popup_shown(&self) -> Result<()>;
}
