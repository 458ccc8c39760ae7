//! CLI command handlers. Each command is in its own file.

mod add;
mod completions;
mod infer;
mod list;
mod remove;
mod rename;
mod set_status;
mod stats;

pub use add::run_add;
pub use completions::{run_completions, run_man};
pub use infer::run_infer;
pub use list::run_list;
pub use remove::run_remove;
pub use rename::run_rename;
pub use set_status::run_set_status;
pub use stats::run_stats;
