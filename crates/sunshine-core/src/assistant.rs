//! The remote assistant collaborator contract.
//!
//! The text-generation backend is opaque to the engine: one request, one
//! reply or one error. No retry or timeout policy is imposed here; the
//! orchestrator reports a failure once and moves on.

use crate::language::Language;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single generation request sent to the remote assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    /// The user's message text.
    pub message: String,
    /// Stable anonymous visitor id.
    pub user_id: String,
    /// Display name, when the session has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Conversation language ("en" | "es" on the wire).
    pub language: Language,
    /// Whether the visitor is authenticated.
    pub is_authenticated: bool,
}

/// The remote assistant's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    /// Generated reply text.
    pub response: String,
}

/// Errors the remote assistant collaborator can produce.
///
/// These never leave the orchestrator boundary: every variant collapses
/// into one localized fallback message in the transcript.
#[derive(Error, Debug, Clone)]
pub enum AssistantError {
    /// The request could not be sent (connect/transport failure).
    #[error("assistant request failed: {message}")]
    Request {
        message: String,
        is_retryable: bool,
    },

    /// The service answered with a non-success status.
    #[error("assistant returned HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        is_retryable: bool,
    },

    /// The service answered but the body was not the expected shape.
    #[error("invalid assistant response: {0}")]
    InvalidResponse(String),

    /// The client is not configured (missing endpoint).
    #[error("assistant configuration error: {0}")]
    Config(String),
}

/// The opaque text-generation collaborator.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Sends one request and awaits one reply. Implementations own their
    /// own timeout; the caller never retries automatically.
    async fn generate(&self, request: AssistantRequest) -> Result<AssistantReply, AssistantError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = AssistantRequest {
            message: "hola".to_string(),
            user_id: "visitor-1".to_string(),
            user_name: None,
            language: Language::Spanish,
            is_authenticated: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userId"], "visitor-1");
        assert_eq!(json["language"], "es");
        assert_eq!(json["isAuthenticated"], false);
        // Absent name is omitted entirely, not serialized as null.
        assert!(json.get("userName").is_none());
    }

    #[test]
    fn test_reply_deserializes() {
        let reply: AssistantReply =
            serde_json::from_str(r#"{"response":"Hi there!"}"#).unwrap();
        assert_eq!(reply.response, "Hi there!");
    }
}
