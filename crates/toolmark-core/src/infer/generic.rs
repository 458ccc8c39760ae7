//! Name-shape heuristics used when no dictionary entry or vendor rule applies.

use super::tables::SUFFIX_EXTENSIONS;
use super::strip_whitespace;

/// Keeps only ASCII `a-z` and `0-9`. Input is expected to be lower-cased already.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn has_dot(lower: &str) -> bool {
    lower.contains('.')
}

/// The user typed something domain-like ("figma.com"); take it as-is.
pub fn dotted_url(lower: &str) -> String {
    format!("https://{}", strip_whitespace(lower))
}

/// Splits `"<stem> <token>"` for the first suffix-table token that matches,
/// returning the stem and the extension.
pub fn split_suffix(lower: &str) -> Option<(&str, &'static str)> {
    SUFFIX_EXTENSIONS.iter().find_map(|(token, ext)| {
        let stem = lower.strip_suffix(token)?.strip_suffix(' ')?;
        Some((stem, *ext))
    })
}

pub fn has_suffix_token(lower: &str) -> bool {
    split_suffix(lower).is_some()
}

pub fn suffix_url(lower: &str) -> String {
    split_suffix(lower)
        .map(|(stem, ext)| format!("https://{}{}", clean(stem), ext))
        .unwrap_or_default()
}

/// `jasperai` and friends: a run-together name ending in "ai".
pub fn has_bare_ai_ending(lower: &str) -> bool {
    let c = clean(lower);
    c.len() > 2 && c.ends_with("ai")
}

pub fn bare_ai_url(lower: &str) -> String {
    let c = clean(lower);
    format!("https://{}.ai", &c[..c.len() - 2])
}

pub fn always(_lower: &str) -> bool {
    true
}

pub fn fallback_url(lower: &str) -> String {
    format!("https://{}.com", clean(lower))
}
