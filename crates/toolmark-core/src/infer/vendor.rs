//! Hand-written rules for product families whose URLs don't follow `<name>.com`.

use super::tables::GOOGLE_CLOUD_TOKENS;
use super::strip_whitespace;

pub fn is_vscode(lower: &str) -> bool {
    lower.contains("vs code") || lower == "vscode"
}

pub fn vscode_url(_lower: &str) -> String {
    "https://vscode.dev".to_string()
}

pub fn is_github(lower: &str) -> bool {
    lower.starts_with("github")
}

/// `github copilot` goes to the feature page; any other trailing words are
/// glued into a single path segment (`github foo bar` -> `/foobar`).
pub fn github_url(lower: &str) -> String {
    if lower.contains("copilot") {
        return "https://github.com/features/copilot".to_string();
    }
    let rest: String = lower.split_whitespace().skip(1).collect();
    if rest.is_empty() {
        "https://github.com".to_string()
    } else {
        format!("https://github.com/{rest}")
    }
}

pub fn is_google(lower: &str) -> bool {
    lower.starts_with("google")
}

/// Maps `google <product>` onto `<product>.google.com`, with two special cases
/// for Vertex AI and bare Cloud.
pub fn google_url(lower: &str) -> String {
    let stripped = lower.replacen("google", "", 1);
    let remainder = stripped.trim();
    if remainder.is_empty() {
        return "https://www.google.com".to_string();
    }

    if GOOGLE_CLOUD_TOKENS.iter().any(|t| remainder.contains(t)) {
        if remainder.contains("vertex") {
            return "https://cloud.google.com/vertex-ai".to_string();
        }
        if remainder == "cloud" {
            return "https://cloud.google.com".to_string();
        }
        return format!("https://{}.google.com", strip_whitespace(remainder));
    }

    // Sub-property default: google colab -> colab.google.com
    format!("https://{}.google.com", strip_whitespace(remainder))
}
