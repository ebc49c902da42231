//! Check command - parse every level of a template's layout chain

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use pagefold_core::PagefoldError;

use crate::context::Context;
use crate::output;

/// Walk `template`'s inheritance chain, reporting each level.
pub fn run(template: String, dir: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(dir, verbose)?;
    let name = ctx.resolve_name(&template);

    let chain = ctx
        .engine()
        .inheritance_chain(&name)
        .map_err(PagefoldError::from)?;

    if json {
        let report = serde_json::json!({
            "template": name,
            "chain": chain,
            "levels": chain.len(),
        });
        output::print_json(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    for level in &chain {
        println!("{} {}", "✓".green().bold(), level);
    }
    println!("\n{} {} level(s) parsed", "✓".green().bold(), chain.len());
    Ok(())
}
