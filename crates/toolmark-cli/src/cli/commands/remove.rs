//! `toolmark remove <id>` – stop tracking a tool.

use anyhow::Result;
use toolmark_core::catalog::{Catalog, CatalogStore, ToolId};

pub fn run_remove(store: &CatalogStore, catalog: &mut Catalog, id: ToolId) -> Result<()> {
    let tool = catalog.remove(id)?;
    store.save(catalog)?;
    tracing::info!(id, name = %tool.name, "removed tool");
    println!("Removed {} \"{}\"", tool.id, tool.name);
    Ok(())
}
