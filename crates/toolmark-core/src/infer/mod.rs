//! Best-effort canonical URL inference from a free-text tool name.
//!
//! The name is normalized once (trimmed, lower-cased) and run through an
//! ordered rule cascade; the first rule whose predicate accepts the name
//! produces the URL:
//!
//! 1. exact dictionary lookup ([`tables::KNOWN_MAPPINGS`])
//! 2. vendor rules: VS Code, GitHub, Google
//! 3. generic inference: dotted input, explicit suffix token, bare `ai`
//!    ending, and finally `<clean>.com`
//!
//! The last rule always matches, so every non-empty name yields a URL. No
//! rule performs I/O or consults anything but its argument.
//!
//! # Examples
//!
//! - `infer("ChatGPT")` → `"https://chatgpt.com"`
//! - `infer("Supabase IO")` → `"https://supabase.io"`
//! - `infer("My Cool Tool")` → `"https://mycooltool.com"`

mod generic;
mod tables;
mod vendor;

pub use tables::{KNOWN_MAPPINGS, SUFFIX_EXTENSIONS};

/// Which stage of the cascade a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Dictionary,
    Vendor,
    Generic,
}

/// One step of the cascade: a predicate over the normalized name and the
/// producer that runs when it holds.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub stage: Stage,
    pub matches: fn(&str) -> bool,
    pub produce: fn(&str) -> String,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("stage", &self.stage)
            .finish()
    }
}

/// The cascade in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "dictionary",
        stage: Stage::Dictionary,
        matches: tables::is_known,
        produce: tables::known_mapping_url,
    },
    Rule {
        name: "vscode",
        stage: Stage::Vendor,
        matches: vendor::is_vscode,
        produce: vendor::vscode_url,
    },
    Rule {
        name: "github",
        stage: Stage::Vendor,
        matches: vendor::is_github,
        produce: vendor::github_url,
    },
    Rule {
        name: "google",
        stage: Stage::Vendor,
        matches: vendor::is_google,
        produce: vendor::google_url,
    },
    Rule {
        name: "dotted",
        stage: Stage::Generic,
        matches: generic::has_dot,
        produce: generic::dotted_url,
    },
    Rule {
        name: "suffix",
        stage: Stage::Generic,
        matches: generic::has_suffix_token,
        produce: generic::suffix_url,
    },
    Rule {
        name: "bare-ai",
        stage: Stage::Generic,
        matches: generic::has_bare_ai_ending,
        produce: generic::bare_ai_url,
    },
    Rule {
        name: "fallback",
        stage: Stage::Generic,
        matches: generic::always,
        produce: generic::fallback_url,
    },
];

/// Result of running the cascade, with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    pub url: String,
    /// `None` when the name was empty and no rule ran.
    pub rule: Option<&'static str>,
}

/// Infers a URL for `name`; returns an empty string for empty/blank input.
pub fn infer(name: &str) -> String {
    explain(name).url
}

/// Like [`infer`], but also reports which rule matched.
pub fn explain(name: &str) -> Inference {
    let lower = normalize(name);
    if lower.is_empty() {
        return Inference {
            url: String::new(),
            rule: None,
        };
    }

    for rule in RULES {
        if (rule.matches)(&lower) {
            let url = (rule.produce)(&lower);
            tracing::trace!(rule = rule.name, %url, "inferred url");
            return Inference {
                url,
                rule: Some(rule.name),
            };
        }
    }

    // The fallback rule accepts everything, so this is only reached if RULES
    // is edited to drop it.
    Inference {
        url: generic::fallback_url(&lower),
        rule: Some("fallback"),
    }
}

/// Trimmed, lower-cased form every rule matches against.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn strip_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}
