//! Session identity domain model.
//!
//! Identity is the semi-persistent half of a session: it survives widget
//! open/close cycles (and page reloads within the same browser session),
//! while the conversation transcript does not.

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Identity carried by a visitor session.
///
/// The display name is set at most once per session: the orchestrator
/// ignores later extractions unless the session was explicitly reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    /// Stable anonymous visitor id (UUID v4), generated on first interaction.
    pub visitor_id: String,
    /// Display name extracted from conversation, if any.
    pub display_name: Option<String>,
    /// Detected conversation language.
    pub language: Language,
    /// Timestamp of the last interaction (ISO 8601 format).
    pub last_active_at: String,
}

impl SessionIdentity {
    /// Creates a fresh identity with a new visitor id and no name.
    pub fn new() -> Self {
        Self {
            visitor_id: uuid::Uuid::new_v4().to_string(),
            display_name: None,
            language: Language::default(),
            last_active_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Refreshes the last-active timestamp.
    pub fn touch(&mut self) {
        self.last_active_at = chrono::Utc::now().to_rfc3339();
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_identity_has_unique_visitor_id() {
        let a = SessionIdentity::new();
        let b = SessionIdentity::new();
        assert_ne!(a.visitor_id, b.visitor_id);
        assert!(uuid::Uuid::parse_str(&a.visitor_id).is_ok());
    }

    #[test]
    fn test_new_identity_defaults() {
        let identity = SessionIdentity::new();
        assert_eq!(identity.display_name, None);
        assert_eq!(identity.language, Language::English);
    }
}
