//! Shared command context

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use pagefold_core::config::Config;
use pagefold_core::{DirectorySource, LayoutEngine};

/// Configuration resolved for one command invocation: `pagefold.toml`
/// from the working directory when present, overridden by flags.
pub struct Context {
    pub config: Config,
    pub templates_dir: PathBuf,
}

impl Context {
    pub fn new(dir: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config_path = Path::new("pagefold.toml");
        let config = if config_path.exists() {
            if verbose {
                println!("{} Reading pagefold.toml", "→".cyan());
            }
            Config::from_file(config_path)?
        } else {
            Config::default()
        };

        let templates_dir = dir.unwrap_or_else(|| PathBuf::from(&config.templates.dir));
        Ok(Self {
            config,
            templates_dir,
        })
    }

    /// Build a layout engine over the resolved templates directory.
    pub fn engine(&self) -> LayoutEngine {
        LayoutEngine::new(Box::new(DirectorySource::new(&self.templates_dir)))
            .with_max_depth(self.config.layout.max_depth)
    }

    /// Append the configured suffix to view names with no extension.
    pub fn resolve_name(&self, template: &str) -> String {
        if Path::new(template).extension().is_some() {
            template.to_string()
        } else {
            format!("{}{}", template, self.config.templates.suffix)
        }
    }
}
