//! Intent domain models.

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// A navigation target awaiting explicit visitor confirmation.
///
/// At most one instance exists at a time; the confirmation dialog binds to
/// it. Created by intent resolution, destroyed on confirm, cancel, or when
/// superseded by a newly detected intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRoute {
    /// In-app destination path.
    pub destination: String,
    /// Human-readable destination title.
    pub title: String,
    /// Localized confirmation prompt shown in the dialog.
    pub message: String,
    /// Whether the destination requires an authenticated user.
    pub requires_auth: bool,
}

/// One entry of the ordered intent rule table.
///
/// Rules are evaluated top-to-bottom; the first match wins, so the table
/// order is the tie-break.
#[derive(Debug)]
pub struct RouteRule {
    /// Stable category slug (doubles as the quick-action id).
    pub id: &'static str,
    /// Case-insensitive keyword phrases that signal this intent.
    pub keywords: &'static [&'static str],
    /// In-app destination path.
    pub destination: &'static str,
    /// English destination title.
    pub title_en: &'static str,
    /// Spanish destination title.
    pub title_es: &'static str,
    /// Whether the destination requires an authenticated user.
    pub requires_auth: bool,
}

impl RouteRule {
    /// Title in the given language.
    pub fn title(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.title_en,
            Language::Spanish => self.title_es,
        }
    }
}
