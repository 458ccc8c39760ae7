//! Tool familiarity catalog: the list of tracked tools and the edits allowed on it.
//!
//! Every name change re-derives the tool's URL through [`crate::infer`]; the
//! catalog is the only place that applies scheme normalization on top.

mod error;
mod persist;
mod seed;
mod types;

pub use error::CatalogError;
pub use persist::CatalogStore;
pub use seed::seed_tools;
pub use types::{Stats, Status, StatusFilter, Tool, ToolId};

use crate::infer;

/// In-memory list of tools, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tools(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    pub fn into_tools(self) -> Vec<Tool> {
        self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    pub fn get(&self, id: ToolId) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Adds a tool at the top of the list with a URL inferred from its name.
    pub fn add(&mut self, name: &str, status: Status) -> Result<&Tool, CatalogError> {
        let name = self.validate_name(name, None)?;
        let id = self.next_id();
        let url = normalize_url(&infer::infer(&name));
        tracing::debug!(id, %name, %url, "adding tool");
        self.tools.insert(
            0,
            Tool {
                id,
                name,
                url,
                status,
            },
        );
        Ok(&self.tools[0])
    }

    /// Renames a tool and re-derives its URL.
    pub fn rename(&mut self, id: ToolId, name: &str) -> Result<&Tool, CatalogError> {
        let idx = self.index_of(id)?;
        let name = self.validate_name(name, Some(id))?;
        let url = normalize_url(&infer::infer(&name));
        tracing::debug!(id, %name, %url, "renaming tool");
        let tool = &mut self.tools[idx];
        tool.name = name;
        tool.url = url;
        Ok(&self.tools[idx])
    }

    /// Sets a tool's status. Returns `false` when it already had that status.
    pub fn set_status(&mut self, id: ToolId, status: Status) -> Result<bool, CatalogError> {
        let idx = self.index_of(id)?;
        let tool = &mut self.tools[idx];
        if tool.status == status {
            return Ok(false);
        }
        tracing::debug!(id, from = %tool.status, to = %status, "status change");
        tool.status = status;
        Ok(true)
    }

    pub fn remove(&mut self, id: ToolId) -> Result<Tool, CatalogError> {
        let idx = self.index_of(id)?;
        Ok(self.tools.remove(idx))
    }

    /// Tools whose name contains `search` (case-insensitive) and whose status
    /// passes `filter`, in list order.
    pub fn filtered(&self, search: &str, filter: StatusFilter) -> Vec<&Tool> {
        let needle = search.to_lowercase();
        self.tools
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&needle) && filter.matches(t.status))
            .collect()
    }

    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            total: self.tools.len(),
            ..Stats::default()
        };
        for t in &self.tools {
            match t.status {
                Status::Heard => stats.heard += 1,
                Status::Used => stats.used += 1,
                Status::Expert => stats.expert += 1,
            }
        }
        stats
    }

    fn index_of(&self, id: ToolId) -> Result<usize, CatalogError> {
        self.tools
            .iter()
            .position(|t| t.id == id)
            .ok_or(CatalogError::NotFound { id })
    }

    fn next_id(&self) -> ToolId {
        self.tools.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Trims `name` and checks it is non-empty and not already used by
    /// another tool (case-insensitive). `editing` is excluded from the check.
    fn validate_name(&self, name: &str, editing: Option<ToolId>) -> Result<String, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        let lower = name.to_lowercase();
        let taken = self
            .tools
            .iter()
            .any(|t| Some(t.id) != editing && t.name.to_lowercase() == lower);
        if taken {
            return Err(CatalogError::Duplicate {
                name: name.to_string(),
            });
        }
        Ok(name.to_string())
    }
}

/// Prefixes `https://` unless `url` is empty or already has an http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() || has_http_scheme(url) {
        return url.to_string();
    }
    format!("https://{url}")
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}
