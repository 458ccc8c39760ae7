//! Static lookup tables used by the inference cascade.

/// Exact lower-cased tool name to canonical URL. Checked before any pattern rule.
pub const KNOWN_MAPPINGS: &[(&str, &str)] = &[
    ("chatgpt", "https://chatgpt.com"),
    ("openai", "https://openai.com"),
    ("claude", "https://claude.ai"),
    ("bard", "https://bard.google.com"),
    ("gemini", "https://gemini.google.com"),
    ("midjourney", "https://midjourney.com"),
    ("react", "https://react.dev"),
    ("vue", "https://vuejs.org"),
    ("angular", "https://angular.io"),
    ("svelte", "https://svelte.dev"),
    ("node", "https://nodejs.org"),
    ("python", "https://python.org"),
    ("rust", "https://rust-lang.org"),
    ("go", "https://go.dev"),
    ("figma", "https://figma.com"),
    ("notion", "https://notion.so"),
];

/// Trailing tokens that name an extension outright ("Supabase IO" -> `.io`).
///
/// Order matters: the first suffix that matches wins.
pub const SUFFIX_EXTENSIONS: &[(&str, &str)] = &[
    ("ai", ".ai"),
    ("io", ".io"),
    ("dev", ".dev"),
    ("org", ".org"),
    ("net", ".net"),
    ("app", ".app"),
    ("com", ".com"),
];

/// Google sub-products that usually live under a cloud/workspace host.
pub const GOOGLE_CLOUD_TOKENS: &[&str] =
    &["cloud", "vertex", "maps", "drive", "docs", "sheets", "slides"];

/// Exact dictionary lookup on an already normalized name.
pub fn known_url(lower: &str) -> Option<&'static str> {
    KNOWN_MAPPINGS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, url)| *url)
}

pub fn is_known(lower: &str) -> bool {
    known_url(lower).is_some()
}

pub fn known_mapping_url(lower: &str) -> String {
    known_url(lower).unwrap_or_default().to_string()
}
