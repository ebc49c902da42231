//! Render command - compose one template through its layout chain

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use pagefold_core::PagefoldError;

use crate::context::Context;
use crate::output;

/// Compose `template` and print it, or write it to `output`.
pub fn run(
    template: String,
    dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(dir, verbose)?;
    let name = ctx.resolve_name(&template);

    if verbose {
        println!(
            "{} Composing '{}' from {}",
            "→".cyan(),
            name,
            ctx.templates_dir.display()
        );
    }

    let composed = ctx.engine().render(&name).map_err(PagefoldError::from)?;

    match output_path {
        Some(path) => {
            std::fs::write(&path, &composed)?;
            println!("{} Wrote '{}' to {}", "✓".green().bold(), name, path.display());
        }
        None => output::print_text(&composed)?,
    }
    Ok(())
}
