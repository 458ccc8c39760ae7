//! `toolmark add <name>` – track a new tool.

use anyhow::Result;
use toolmark_core::catalog::{Catalog, CatalogStore, Status};

pub fn run_add(
    store: &CatalogStore,
    catalog: &mut Catalog,
    name: &str,
    status: Status,
) -> Result<()> {
    let tool = catalog.add(name, status)?.clone();
    store.save(catalog)?;
    let url = if tool.url.is_empty() { "-" } else { tool.url.as_str() };
    println!(
        "Added {} \"{}\" ({}) {}",
        tool.id, tool.name, tool.status, url
    );
    Ok(())
}
