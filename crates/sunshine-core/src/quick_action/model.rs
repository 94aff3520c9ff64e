//! Quick-action domain models.

use serde::{Deserialize, Serialize};

/// What activating a quick action does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum QuickActionKind {
    /// Navigate straight to an in-app path, no confirmation dialog.
    Navigate {
        /// Destination path (already resolved for the visitor's auth state).
        path: String,
    },
    /// Re-submit a canned phrase to the orchestrator as a new user turn.
    FollowUp {
        /// The canned phrase to send.
        prompt: String,
    },
}

/// A suggested follow-up button attached to an assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    /// Stable action id (category slug, or "help" for the fallback).
    pub id: String,
    /// Localized button label.
    pub label: String,
    /// What activating the button does.
    pub action: QuickActionKind,
}

impl QuickAction {
    /// Creates a direct-navigation action.
    pub fn navigate(
        id: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action: QuickActionKind::Navigate { path: path.into() },
        }
    }

    /// Creates a canned follow-up action.
    pub fn follow_up(
        id: impl Into<String>,
        label: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action: QuickActionKind::FollowUp {
                prompt: prompt.into(),
            },
        }
    }
}
