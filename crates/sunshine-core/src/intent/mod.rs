//! Intent detection over conversation text.
//!
//! A reply is enriched by exactly one of two things: a navigation intent
//! awaiting confirmation, or a list of suggested quick actions. The
//! mutual exclusivity is a type-level invariant of [`ReplyEnrichment`],
//! produced by a single evaluation step.

pub mod model;
pub mod router;

pub use model::{PendingRoute, RouteRule};
pub use router::{ROUTE_RULES, detect_route, resolve_destination, resolve_route};

use crate::language::Language;
use crate::quick_action::{self, QuickAction};

/// The outcome of scanning one turn's user text and assistant reply.
///
/// `Route` suppresses quick actions for the turn; `QuickActions` (possibly
/// empty) means no navigation intent was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyEnrichment {
    /// A navigation intent to present for confirmation.
    Route(PendingRoute),
    /// Suggested follow-up actions; never combined with a route.
    QuickActions(Vec<QuickAction>),
}

impl ReplyEnrichment {
    /// Returns the route, if this enrichment carries one.
    pub fn route(&self) -> Option<&PendingRoute> {
        match self {
            Self::Route(route) => Some(route),
            Self::QuickActions(_) => None,
        }
    }
}

/// Evaluates one turn and returns its enrichment.
///
/// Rules are checked before quick actions; the two never both apply.
pub fn evaluate(
    user_text: &str,
    reply_text: &str,
    language: Language,
    is_authenticated: bool,
) -> ReplyEnrichment {
    match detect_route(user_text, reply_text) {
        Some(rule) => ReplyEnrichment::Route(resolve_route(rule, language, is_authenticated)),
        None => ReplyEnrichment::QuickActions(quick_action::generate(
            user_text,
            reply_text,
            language,
            is_authenticated,
        )),
    }
}
