//! Greeting pools and the non-repeating rotator.
//!
//! One greeting is shown per widget-open event, not per message. The
//! rotator only remembers the id of the last greeting it picked, which is
//! enough to guarantee that two consecutive opens never show the same
//! greeting when the pool has more than one entry.

use crate::language::Language;
use rand::Rng;

const ENGLISH_GREETINGS: &[&str] = &[
    "Hi there! I'm Sunshine, your beauty marketplace guide. What can I help you with today?",
    "Welcome back to the salon floor! Ask me anything about jobs, artists, or salons.",
    "Hello! Looking to hire, get hired, or grow your beauty business? I'm here for it.",
    "Hey! I'm Sunshine. Tell me what you're looking for and I'll point you the right way.",
];

const SPANISH_GREETINGS: &[&str] = &[
    "¡Hola! Soy Sunshine, tu guía del marketplace de belleza. ¿En qué te ayudo hoy?",
    "¡Bienvenido de nuevo! Pregúntame lo que quieras sobre empleos, artistas o salones.",
    "¡Hola! ¿Buscas contratar, conseguir trabajo o hacer crecer tu negocio de belleza?",
    "¡Hey! Soy Sunshine. Cuéntame qué buscas y te llevo al lugar correcto.",
];

/// Returns the fixed greeting pool for a language.
pub fn pool(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => ENGLISH_GREETINGS,
        Language::Spanish => SPANISH_GREETINGS,
    }
}

/// A greeting chosen by the rotator, together with its pool id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// Index of the greeting within its language pool.
    pub id: usize,
    /// The greeting text.
    pub text: String,
}

/// Stateful picker over a greeting pool that avoids immediate repeats.
///
/// Selection state is only the last index chosen; there is no full history.
#[derive(Debug, Default)]
pub struct GreetingRotator {
    last_id: Option<usize>,
}

impl GreetingRotator {
    /// Creates a rotator with no previously shown greeting.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of the greeting most recently returned, if any.
    pub fn last_id(&self) -> Option<usize> {
        self.last_id
    }

    /// Picks the next greeting for `language`.
    ///
    /// When the pool has more than one entry, the returned id always
    /// differs from the previously returned id.
    pub fn next<R: Rng>(&mut self, language: Language, rng: &mut R) -> Greeting {
        let pool = pool(language);
        let id = match (self.last_id, pool.len()) {
            (_, 1) => 0,
            (Some(last), len) if last < len => {
                // Draw from the pool minus the last index, then shift past it.
                let raw = rng.gen_range(0..len - 1);
                if raw >= last { raw + 1 } else { raw }
            }
            (_, len) => rng.gen_range(0..len),
        };

        self.last_id = Some(id);
        Greeting {
            id,
            text: pool[id].to_string(),
        }
    }
}
