use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::catalog::Status;

/// Global configuration loaded from `~/.config/toolmark/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolmarkConfig {
    /// Status given to newly added tools when none is specified.
    #[serde(default)]
    pub default_status: Status,
    /// Optional override for the catalog JSON file (default under XDG data dir).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Start from the built-in starter list when no catalog file exists.
    #[serde(default = "default_seed_on_first_run")]
    pub seed_on_first_run: bool,
}

fn default_seed_on_first_run() -> bool {
    true
}

impl Default for ToolmarkConfig {
    fn default() -> Self {
        Self {
            default_status: Status::Heard,
            data_file: None,
            seed_on_first_run: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("toolmark")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ToolmarkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ToolmarkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ToolmarkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
