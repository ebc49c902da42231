//! List command - enumerate template files by suffix

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use walkdir::WalkDir;

use crate::context::Context;
use crate::output;

/// List template files under the templates directory, sorted.
pub fn run(dir: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(dir, verbose)?;
    let suffix = ctx.config.templates.suffix.as_str();

    let mut names: Vec<String> = Vec::new();
    for entry in WalkDir::new(&ctx.templates_dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path.to_string_lossy().ends_with(suffix) {
            continue;
        }
        if let Ok(rel) = path.strip_prefix(&ctx.templates_dir) {
            names.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
    names.sort();

    if json {
        output::print_json(&serde_json::to_string_pretty(&names)?)?;
        return Ok(());
    }

    if names.is_empty() {
        println!(
            "{} No '{}' templates found in {}",
            "!".yellow(),
            suffix,
            ctx.templates_dir.display()
        );
    } else {
        for name in &names {
            println!("{}", name);
        }
    }
    Ok(())
}
