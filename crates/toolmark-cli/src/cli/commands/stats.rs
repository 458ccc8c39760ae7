//! `toolmark stats` – per-status counts.

use anyhow::Result;
use toolmark_core::catalog::Catalog;

pub fn run_stats(catalog: &Catalog) -> Result<()> {
    let s = catalog.stats();
    println!("Total Tools  {}", s.total);
    println!("Heard        {}", s.heard);
    println!("Used         {}", s.used);
    println!("Expert       {}", s.expert);
    Ok(())
}
