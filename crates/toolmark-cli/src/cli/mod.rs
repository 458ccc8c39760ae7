//! CLI for the toolmark tool tracker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use toolmark_core::catalog::{CatalogStore, Status, StatusFilter, ToolId};
use toolmark_core::config;

use commands::{
    run_add, run_completions, run_infer, run_list, run_man, run_remove, run_rename,
    run_set_status, run_stats,
};

/// Top-level CLI for toolmark.
#[derive(Debug, Parser)]
#[command(name = "toolmark")]
#[command(about = "toolmark: track how well you know your software tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Familiarity level as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Heard,
    Used,
    Expert,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Heard => Status::Heard,
            StatusArg::Used => Status::Used,
            StatusArg::Expert => Status::Expert,
        }
    }
}

/// `list --filter` values; `all` disables status filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterArg {
    #[default]
    All,
    Heard,
    Used,
    Expert,
}

impl From<FilterArg> for StatusFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => StatusFilter::All,
            FilterArg::Heard => StatusFilter::Only(Status::Heard),
            FilterArg::Used => StatusFilter::Only(Status::Used),
            FilterArg::Expert => StatusFilter::Only(Status::Expert),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL inferred for a tool name.
    Infer {
        /// Tool name (multiple words are joined with spaces).
        #[arg(required = true)]
        name: Vec<String>,
        /// Also print which rule produced the URL.
        #[arg(long)]
        explain: bool,
    },

    /// Track a new tool; its URL is inferred from the name.
    Add {
        /// Tool name (multiple words are joined with spaces).
        #[arg(required = true)]
        name: Vec<String>,
        /// Initial status (defaults to `default_status` from config).
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Rename a tool and re-derive its URL.
    Rename {
        /// Tool identifier.
        id: ToolId,
        /// New name.
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Change how well you know a tool.
    SetStatus {
        /// Tool identifier.
        id: ToolId,
        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Stop tracking a tool.
    Remove {
        /// Tool identifier.
        id: ToolId,
    },

    /// List tracked tools.
    List {
        /// Only show tools with this status.
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        /// Case-insensitive substring to match against tool names.
        #[arg(long)]
        search: Option<String>,
    },

    /// Show counts per status.
    Stats,

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Commands that never touch the catalog run before config is loaded.
        let command = match cli.command {
            CliCommand::Infer { name, explain } => return run_infer(&name.join(" "), explain),
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            other => other,
        };

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = CatalogStore::from_config(&cfg)?;
        let mut catalog = store.load(cfg.seed_on_first_run)?;

        match command {
            CliCommand::Add { name, status } => {
                let status = status.map(Status::from).unwrap_or(cfg.default_status);
                run_add(&store, &mut catalog, &name.join(" "), status)?;
            }
            CliCommand::Rename { id, name } => {
                run_rename(&store, &mut catalog, id, &name.join(" "))?;
            }
            CliCommand::SetStatus { id, status } => {
                run_set_status(&store, &mut catalog, id, status.into())?;
            }
            CliCommand::Remove { id } => run_remove(&store, &mut catalog, id)?,
            CliCommand::List { filter, search } => {
                run_list(&catalog, search.as_deref().unwrap_or(""), filter.into())?;
            }
            CliCommand::Stats => run_stats(&catalog)?,
            CliCommand::Infer { .. } | CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
