//! Language tags and the heuristic text classifier.
//!
//! The marketplace serves two audiences, so every piece of canned copy
//! exists in English and Spanish. Classification is a pure keyword
//! heuristic: it never errors, and ambiguous text falls back to English.

use serde::{Deserialize, Serialize};

/// Supported conversation languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// English (the default for unrecognized text).
    #[default]
    #[serde(rename = "en")]
    English,
    /// Spanish.
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// Returns the BCP 47 style code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

/// Characters that only occur in Spanish text among the two supported
/// languages. A single hit is a strong signal.
const SPANISH_CHARS: &[char] = &['ñ', 'Ñ', '¿', '¡', 'á', 'é', 'í', 'ó', 'ú', 'ü'];

/// Common Spanish words matched as whole tokens.
const SPANISH_WORDS: &[&str] = &[
    "hola", "buenas", "gracias", "quiero", "necesito", "busco", "trabajo", "empleo", "ayuda",
    "vender", "negocio", "cuenta", "nombre", "llamo", "soy", "publicar", "puedo", "donde",
    "tengo", "para", "belleza",
];

/// Spanish multi-word markers matched as substrings.
const SPANISH_PHRASES: &[&str] = &["por favor", "me llamo", "mi nombre"];

/// Classifies free text into one of the two supported languages.
///
/// Pure and deterministic: identical input always yields identical output.
/// Text with no recognizable Spanish marker defaults to [`Language::English`];
/// that is a policy choice, not an error.
pub fn classify(text: &str) -> Language {
    if text.chars().any(|c| SPANISH_CHARS.contains(&c)) {
        return Language::Spanish;
    }

    let lower = text.to_lowercase();

    if SPANISH_PHRASES.iter().any(|p| lower.contains(p)) {
        return Language::Spanish;
    }

    let has_spanish_token = lower
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .any(|token| SPANISH_WORDS.contains(&token));

    if has_spanish_token {
        Language::Spanish
    } else {
        Language::English
    }
}
