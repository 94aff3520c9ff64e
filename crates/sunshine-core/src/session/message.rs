//! Transcript message types.

use crate::intent::PendingRoute;
use crate::quick_action::QuickAction;
use serde::{Deserialize, Serialize};

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSender {
    /// Message typed by the visitor.
    User,
    /// Message produced by the assistant (remote or canned).
    Assistant,
}

/// A navigation-style link rendered inside an assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLink {
    /// Human-readable label.
    pub label: String,
    /// In-app destination path.
    pub path: String,
}

/// A single message in the widget transcript.
///
/// Messages are immutable once rendered, with one exception: the pending
/// route-confirmation payload may be cleared after the user responds to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Monotonic identifier within one orchestrator instance.
    pub id: u64,
    /// Message body.
    pub text: String,
    /// Author of the message.
    pub sender: MessageSender,
    /// Timestamp when the message was created (ISO 8601 format).
    pub created_at: String,
    /// Navigation-style links, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<MessageLink>>,
    /// Suggested quick actions, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_actions: Option<Vec<QuickAction>>,
    /// Route awaiting confirmation, if this message proposed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_route: Option<PendingRoute>,
}

impl ChatMessage {
    /// Creates a plain user message.
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self::plain(id, text, MessageSender::User)
    }

    /// Creates a plain assistant message.
    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self::plain(id, text, MessageSender::Assistant)
    }

    fn plain(id: u64, text: impl Into<String>, sender: MessageSender) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            created_at: chrono::Utc::now().to_rfc3339(),
            links: None,
            quick_actions: None,
            pending_route: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_constructors() {
        let user = ChatMessage::user(1, "hello");
        assert_eq!(user.sender, MessageSender::User);
        assert_eq!(user.text, "hello");
        assert!(user.quick_actions.is_none());
        assert!(user.pending_route.is_none());

        let assistant = ChatMessage::assistant(2, "hi!");
        assert_eq!(assistant.sender, MessageSender::Assistant);
    }
}
