//! Types stored in the tool catalog.

use serde::{Deserialize, Serialize};

/// Tool identifier.
pub type ToolId = u64;

/// How well the user knows a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Heard,
    Used,
    Expert,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Heard, Status::Used, Status::Expert];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Heard => "heard",
            Status::Used => "used",
            Status::Expert => "expert",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Heard => "Heard of it",
            Status::Used => "Used it",
            Status::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Status filter for listing; `All` matches every tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s == status,
        }
    }
}

/// A tracked tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    /// Empty when no URL could be derived.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: Status,
}

/// Per-status counts over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub total: usize,
    pub heard: usize,
    pub used: usize,
    pub expert: usize,
}
