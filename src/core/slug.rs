//! Slug generation for URL-safe identifiers.
//!
//! Names are folded to ASCII (accents are decomposed and dropped), lowercased,
//! stripped of punctuation, and joined with single hyphens.

use unicode_normalization::UnicodeNormalization;

/// Converts a human-readable name into a lowercase, hyphen-separated slug.
///
/// Characters other than ASCII letters, digits, underscores, whitespace and
/// hyphens are removed. Runs of whitespace and hyphens collapse to one `-`,
/// and leading or trailing `-`/`_` are trimmed.
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for ch in value.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_whitespace() || ch == '-' {
            pending_separator = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(ch.to_ascii_lowercase());
        }
    }

    slug.trim_matches(|c: char| c == '-' || c == '_').to_string()
}
