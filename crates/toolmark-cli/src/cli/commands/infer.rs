//! `toolmark infer <name>` – print the URL guessed for a tool name.

use anyhow::Result;
use toolmark_core::infer;

pub fn run_infer(name: &str, explain: bool) -> Result<()> {
    let inference = infer::explain(name);
    if explain {
        let rule = inference.rule.unwrap_or("-");
        println!("{:<10} {}", rule, inference.url);
    } else if !inference.url.is_empty() {
        println!("{}", inference.url);
    }
    Ok(())
}
