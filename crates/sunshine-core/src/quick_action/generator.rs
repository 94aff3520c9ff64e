//! Quick-action generation from topical keywords.
//!
//! The intent router reacts to explicit navigation phrasing ("I want to
//! post a job"); this generator reacts to softer topical mentions in
//! either text ("salons usually handle jobs from the dashboard") and
//! suggests a button instead of a confirmation dialog. The orchestrator
//! only calls it when no navigation intent was detected.

use super::model::QuickAction;
use crate::copy;
use crate::intent::resolve_destination;
use crate::language::Language;

struct ActionRule {
    id: &'static str,
    keywords: &'static [&'static str],
    path: &'static str,
    label_en: &'static str,
    label_es: &'static str,
    requires_auth: bool,
}

/// Topical suggestion table, evaluated in order. One action per category
/// at most.
const ACTION_RULES: &[ActionRule] = &[
    ActionRule {
        id: "post-job",
        keywords: &["job", "jobs", "stylist position", "empleo", "empleos", "puesto"],
        path: "/post-job",
        label_en: "Post a job",
        label_es: "Publicar empleo",
        requires_auth: false,
    },
    ActionRule {
        id: "sell-business",
        keywords: &["sell", "selling", "for sale", "vender", "venta"],
        path: "/sell-business",
        label_en: "Sell your business",
        label_es: "Vender tu negocio",
        requires_auth: true,
    },
    ActionRule {
        id: "sign-up",
        keywords: &["account", "profile", "member", "cuenta", "perfil", "miembro"],
        path: "/signup",
        label_en: "Create an account",
        label_es: "Crear cuenta",
        requires_auth: false,
    },
    ActionRule {
        id: "articles",
        keywords: &["article", "blog", "tips", "guide", "artículo", "articulo", "consejos"],
        path: "/articles",
        label_en: "Read the blog",
        label_es: "Leer el blog",
        requires_auth: false,
    },
];

/// Help-seeking phrases that earn the generic fallback action.
const HELP_KEYWORDS: &[&str] = &[
    "help",
    "how do i",
    "how can i",
    "what can you",
    "ayuda",
    "cómo puedo",
    "como puedo",
    "qué puedes",
    "que puedes",
];

impl ActionRule {
    fn label(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.label_en,
            Language::Spanish => self.label_es,
        }
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Derives suggested actions for a turn with no navigation intent.
///
/// At most one action per detected category, in table order. When no
/// category matches and the user text contains a help-seeking keyword,
/// exactly one generic "ask me anything" action is returned instead.
pub fn generate(
    user_text: &str,
    reply_text: &str,
    language: Language,
    is_authenticated: bool,
) -> Vec<QuickAction> {
    let user_lower = user_text.to_lowercase();
    let reply_lower = reply_text.to_lowercase();

    let mut actions: Vec<QuickAction> = ACTION_RULES
        .iter()
        .filter(|rule| {
            contains_any(&user_lower, rule.keywords) || contains_any(&reply_lower, rule.keywords)
        })
        .map(|rule| {
            QuickAction::navigate(
                rule.id,
                rule.label(language),
                resolve_destination(rule.path, rule.requires_auth, is_authenticated),
            )
        })
        .collect();

    if actions.is_empty() && contains_any(&user_lower, HELP_KEYWORDS) {
        actions.push(QuickAction::follow_up(
            "help",
            copy::ask_me_anything(language),
            copy::help_prompt(language),
        ));
    }

    actions
}
