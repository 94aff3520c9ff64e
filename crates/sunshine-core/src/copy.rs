//! Localized canned copy used across the engine.
//!
//! Everything the widget says without asking the remote assistant lives
//! here, per language, so the conversational tone stays in one place.
//! Greeting pools are the exception; they live with the rotator in
//! [`crate::greeting`].

use crate::language::Language;

/// Greeting used when the visitor introduces themselves by name.
pub fn greeting_by_name(language: Language, name: &str) -> String {
    match language {
        Language::English => format!(
            "Hi {}! Great to meet you. What can I help you with today?",
            name
        ),
        Language::Spanish => format!(
            "¡Hola {}! Encantada de conocerte. ¿En qué te puedo ayudar hoy?",
            name
        ),
    }
}

/// Fallback shown when the remote assistant call fails.
pub fn apology(language: Language) -> &'static str {
    match language {
        Language::English => {
            "I'm so sorry, something went wrong on my end. Mind trying that again in a moment?"
        }
        Language::Spanish => {
            "Lo siento mucho, algo salió mal. ¿Puedes intentarlo de nuevo en un momento?"
        }
    }
}

/// Confirmation prompt for a detected navigation intent.
pub fn route_confirmation(language: Language, title: &str) -> String {
    match language {
        Language::English => format!("Would you like me to take you to {}?", title),
        Language::Spanish => format!("¿Quieres que te lleve a {}?", title),
    }
}

/// Message appended exactly once after a confirmed navigation.
pub fn taking_you_there(language: Language, title: &str) -> String {
    match language {
        Language::English => format!("Perfect, taking you to {} now!", title),
        Language::Spanish => format!("¡Perfecto! Te llevo a {} ahora.", title),
    }
}

/// Title presented when an auth-gated destination is swapped for sign-up.
pub fn signup_to_continue(language: Language) -> &'static str {
    match language {
        Language::English => "Sign Up to Continue",
        Language::Spanish => "Crear cuenta para continuar",
    }
}

/// Label of the generic help quick action.
pub fn ask_me_anything(language: Language) -> &'static str {
    match language {
        Language::English => "Ask me anything",
        Language::Spanish => "Pregúntame lo que sea",
    }
}

/// Canned phrase the help quick action re-submits to the orchestrator.
pub fn help_prompt(language: Language) -> &'static str {
    match language {
        Language::English => "What can you help me with?",
        Language::Spanish => "¿Con qué me puedes ayudar?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_by_name_includes_name() {
        assert!(greeting_by_name(Language::English, "Lisa").contains("Lisa"));
        assert!(greeting_by_name(Language::Spanish, "Sofía").contains("Sofía"));
    }

    #[test]
    fn test_copy_differs_per_language() {
        assert_ne!(apology(Language::English), apology(Language::Spanish));
        assert_ne!(
            taking_you_there(Language::English, "Articles"),
            taking_you_there(Language::Spanish, "Articles")
        );
    }
}
