//! Display-name extraction from free conversation text.
//!
//! Recognizes explicit self-introductions in both supported languages.
//! The patterns are intentionally conservative: a false negative costs a
//! remote round trip, a false positive pollutes the session identity.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // English introductions
        r"(?i)\bmy name is\s+([A-Za-zÀ-ÖØ-öø-ÿ][A-Za-zÀ-ÖØ-öø-ÿ'-]+)",
        r"(?i)\bcall me\s+([A-Za-zÀ-ÖØ-öø-ÿ][A-Za-zÀ-ÖØ-öø-ÿ'-]+)",
        // Capitalization is required after "I'm" to skip "I'm looking ..."
        r"\b[Ii]'?m\s+([A-ZÀ-ÖØ-Þ][A-Za-zÀ-ÖØ-öø-ÿ'-]+)",
        // Spanish introductions
        r"(?i)\bme llamo\s+([A-Za-zÀ-ÖØ-öø-ÿ][A-Za-zÀ-ÖØ-öø-ÿ'-]+)",
        r"(?i)\bmi nombre es\s+([A-Za-zÀ-ÖØ-öø-ÿ][A-Za-zÀ-ÖØ-öø-ÿ'-]+)",
        r"\b[Ss]oy\s+([A-ZÀ-ÖØ-Þ][A-Za-zÀ-ÖØ-öø-ÿ'-]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("name pattern must compile"))
    .collect()
});

/// Words that follow "I'm"/"soy" without being names.
const NON_NAME_WORDS: &[&str] = &[
    "looking", "trying", "searching", "interested", "here", "new", "just", "not", "sure", "good",
    "fine", "okay", "ready", "sorry", "glad", "happy", "going", "gonna", "buscando", "interesado",
    "interesada", "nuevo", "nueva", "bien", "feliz",
];

/// Attempts to extract a display name from user text.
///
/// Returns the name with its first letter capitalized, or `None` when the
/// text contains no recognizable self-introduction.
pub fn extract_name(text: &str) -> Option<String> {
    for pattern in NAME_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let candidate = captures.get(1)?.as_str();
            if NON_NAME_WORDS.contains(&candidate.to_lowercase().as_str()) {
                continue;
            }
            return Some(capitalize(candidate));
        }
    }
    None
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
