//! `toolmark set-status <id> <status>`.

use anyhow::Result;
use toolmark_core::catalog::{Catalog, CatalogStore, Status, ToolId};

pub fn run_set_status(
    store: &CatalogStore,
    catalog: &mut Catalog,
    id: ToolId,
    status: Status,
) -> Result<()> {
    if catalog.set_status(id, status)? {
        store.save(catalog)?;
        println!("Tool {id} is now {}", status.label());
    } else {
        println!("Tool {id} already {}", status.label());
    }
    Ok(())
}
