//! The ordered intent rule table and its evaluation.

use super::model::{PendingRoute, RouteRule};
use crate::copy;
use crate::language::Language;

/// Public sign-up path, also used as the substitute destination for
/// auth-required routes requested by unauthenticated visitors.
pub const SIGNUP_PATH: &str = "/signup";

/// The intent rule table, evaluated top-to-bottom. Order is the tie-break:
/// a message matching several rules resolves to the first one listed.
pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule {
        id: "post-job",
        keywords: &[
            "post a job",
            "post job",
            "job opening",
            "job posting",
            "hiring",
            "need to hire",
            "want to hire",
            "vacancy",
            "publicar un empleo",
            "publicar empleo",
            "busco contratar",
        ],
        destination: "/post-job",
        title_en: "Post a Job",
        title_es: "Publicar empleo",
        requires_auth: false,
    },
    RouteRule {
        id: "sell-business",
        keywords: &[
            "sell my salon",
            "sell my business",
            "sell a business",
            "list my business",
            "list my salon",
            "business for sale",
            "vender mi negocio",
            "vender mi salón",
            "vender mi salon",
        ],
        destination: "/sell-business",
        title_en: "Sell Your Business",
        title_es: "Vender tu negocio",
        requires_auth: true,
    },
    RouteRule {
        id: "sign-up",
        keywords: &[
            "sign up",
            "signup",
            "create an account",
            "create account",
            "register",
            "crear una cuenta",
            "crear cuenta",
            "registrarme",
        ],
        destination: "/signup",
        title_en: "Sign Up",
        title_es: "Crear cuenta",
        requires_auth: false,
    },
    RouteRule {
        id: "articles",
        keywords: &[
            "read articles",
            "read an article",
            "your blog",
            "the blog",
            "beauty tips",
            "artículos",
            "articulos",
            "consejos de belleza",
        ],
        destination: "/articles",
        title_en: "Articles",
        title_es: "Artículos",
        requires_auth: false,
    },
];

fn matches(rule: &RouteRule, text: &str) -> bool {
    let lower = text.to_lowercase();
    rule.keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Scans user text and reply text against the rule table.
///
/// A rule matches when either text contains one of its keywords,
/// case-insensitively. The first matching rule wins; there is no scoring
/// and no multi-intent merge.
pub fn detect_route(user_text: &str, reply_text: &str) -> Option<&'static RouteRule> {
    ROUTE_RULES
        .iter()
        .find(|rule| matches(rule, user_text) || matches(rule, reply_text))
}

/// Resolves the destination a visitor can actually be sent to.
///
/// An auth-required destination requested by an unauthenticated visitor is
/// replaced with the sign-up path carrying the original destination as a
/// redirect target. The substitution happens here, before any
/// confirmation is presented.
pub fn resolve_destination(
    destination: &str,
    requires_auth: bool,
    is_authenticated: bool,
) -> String {
    if requires_auth && !is_authenticated {
        format!("{}?redirect={}", SIGNUP_PATH, destination)
    } else {
        destination.to_string()
    }
}

/// Builds the pending route a matched rule resolves to for this visitor.
pub fn resolve_route(rule: &RouteRule, language: Language, is_authenticated: bool) -> PendingRoute {
    if rule.requires_auth && !is_authenticated {
        let title = copy::signup_to_continue(language).to_string();
        PendingRoute {
            destination: resolve_destination(rule.destination, true, false),
            message: copy::route_confirmation(language, &title),
            title,
            requires_auth: false,
        }
    } else {
        let title = rule.title(language).to_string();
        PendingRoute {
            destination: rule.destination.to_string(),
            message: copy::route_confirmation(language, &title),
            title,
            requires_auth: rule.requires_auth,
        }
    }
}
