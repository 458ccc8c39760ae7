//! Persist the catalog to disk (JSON under XDG data dir).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::seed::seed_tools;
use super::types::Tool;
use super::Catalog;
use crate::config::ToolmarkConfig;

/// Location of the catalog's JSON file.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default data file: `~/.local/share/toolmark/tools.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("toolmark")?;
        Ok(xdg_dirs.get_data_home().join("tools.json"))
    }

    /// Store at the configured `data_file`, or the default path.
    pub fn from_config(cfg: &ToolmarkConfig) -> Result<Self> {
        let path = match &cfg.data_file {
            Some(p) => p.clone(),
            None => Self::default_path()?,
        };
        Ok(Self::at(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog. A missing file yields the seed list when `seed` is
    /// set, otherwise an empty catalog.
    pub fn load(&self, seed: bool) -> Result<Catalog> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), seed, "no catalog file yet");
                let tools = if seed { seed_tools() } else { Vec::new() };
                return Ok(Catalog::from_tools(tools));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read catalog: {}", self.path.display()))
            }
        };
        let tools: Vec<Tool> = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse catalog: {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = tools.len(), "loaded catalog");
        Ok(Catalog::from_tools(tools))
    }

    /// Save the catalog (creates parent dir if needed).
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let tools: Vec<&Tool> = catalog.iter().collect();
        let json = serde_json::to_string_pretty(&tools).context("serialize catalog")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write catalog: {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = tools.len(), "saved catalog");
        Ok(())
    }
}
