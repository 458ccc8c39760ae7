//! `toolmark rename <id> <name>` – rename a tool; its URL is re-derived.

use anyhow::Result;
use toolmark_core::catalog::{Catalog, CatalogStore, ToolId};

pub fn run_rename(
    store: &CatalogStore,
    catalog: &mut Catalog,
    id: ToolId,
    name: &str,
) -> Result<()> {
    let tool = catalog.rename(id, name)?.clone();
    store.save(catalog)?;
    println!("Renamed {} to \"{}\" {}", tool.id, tool.name, tool.url);
    Ok(())
}
