//! Widget mode for route-confirmation state management.

use crate::intent::PendingRoute;
use serde::{Deserialize, Serialize};

/// Represents the current logical mode of the widget.
///
/// This tracks whether the widget is in normal chat mode or waiting for
/// the visitor to confirm a proposed navigation. At most one route can be
/// pending at a time; proposing a new one replaces the previous route
/// rather than queuing behind it.
///
/// The minimized/restored toggle is deliberately *not* part of this enum:
/// minimizing the widget preserves whichever mode was active, so the
/// orchestrator tracks it as an orthogonal flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WidgetMode {
    /// Normal chat mode, no navigation pending.
    Idle,
    /// A navigation target was proposed and awaits visitor confirmation.
    AwaitingConfirmation {
        /// The route awaiting confirmation.
        route: PendingRoute,
    },
}

impl WidgetMode {
    /// Returns true when no route confirmation is pending.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The route awaiting confirmation, if any.
    pub fn pending_route(&self) -> Option<&PendingRoute> {
        match self {
            Self::Idle => None,
            Self::AwaitingConfirmation { route } => Some(route),
        }
    }
}

impl Default for WidgetMode {
    fn default() -> Self {
        Self::Idle
    }
}
