//! Engagement domain model.

use serde::{Deserialize, Serialize};

/// Durable engagement bookkeeping.
///
/// Unlike session identity, this state survives browser restarts: the
/// conversion popup is a one-shot per installation, not per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementState {
    /// Whether the conversion popup has ever been shown.
    #[serde(default)]
    pub popup_shown: bool,
}
