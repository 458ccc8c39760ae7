//! `toolmark list` – show tracked tools, optionally filtered.

use anyhow::Result;
use toolmark_core::catalog::{Catalog, StatusFilter};

pub fn run_list(catalog: &Catalog, search: &str, filter: StatusFilter) -> Result<()> {
    let tools = catalog.filtered(search, filter);
    if tools.is_empty() {
        println!("No tools found.");
        return Ok(());
    }
    println!("{:<6} {:<8} {:<28} {}", "ID", "STATUS", "NAME", "URL");
    for t in tools {
        let url = if t.url.is_empty() { "-" } else { t.url.as_str() };
        println!("{:<6} {:<8} {:<28} {}", t.id, t.status, t.name, url);
    }
    Ok(())
}
