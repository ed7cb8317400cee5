//! URL-safe slug generation

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is not a word character, whitespace or a hyphen.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s-]").unwrap();
    /// Runs of whitespace, underscores and hyphens collapse to one hyphen.
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// Generate a URL-safe slug from a title or file stem.
///
/// Lowercases, strips non-word characters, collapses separator runs into
/// single hyphens and trims leading/trailing hyphens. Applying it to its
/// own output is a no-op.
pub fn generate_slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let hyphenated = SEPARATOR_RUN.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}
