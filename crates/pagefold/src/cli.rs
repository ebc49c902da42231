//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagefold")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose a template through its layout chain
    Render {
        /// Template name, relative to the templates directory
        template: String,

        /// Templates directory (overrides pagefold.toml)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Write the composed page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse every level of a template's layout chain
    Check {
        /// Template name, relative to the templates directory
        template: String,

        /// Templates directory (overrides pagefold.toml)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List template files in the templates directory
    List {
        /// Templates directory (overrides pagefold.toml)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
