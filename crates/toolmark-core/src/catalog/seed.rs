//! Built-in starter list used when no data file exists yet.

use super::types::{Status, Tool, ToolId};

const SEED: &[(ToolId, &str, &str, Status)] = &[
    (1, "ChatGPT", "https://chatgpt.com", Status::Used),
    (2, "GitHub Copilot", "https://github.com/copilot", Status::Expert),
    (3, "Midjourney", "https://midjourney.com", Status::Heard),
    (4, "VS Code", "https://vscode.dev", Status::Expert),
    (5, "Claude", "https://claude.ai", Status::Used),
    (17, "Google Colab", "https://colab.google", Status::Used),
    (24, "Hugging Face", "https://huggingface.co", Status::Heard),
    (32, "Google Antigravity", "https://developers.google.com", Status::Heard),
];

/// Seed tools in display order. URLs are curated, not inferred.
pub fn seed_tools() -> Vec<Tool> {
    SEED.iter()
        .map(|(id, name, url, status)| Tool {
            id: *id,
            name: (*name).to_string(),
            url: (*url).to_string(),
            status: *status,
        })
        .collect()
}
