mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    let result = match cli.command {
        Commands::Render {
            template,
            dir,
            output,
        } => commands::render::run(template, dir, output, cli.verbose),
        Commands::Check { template, dir, json } => {
            commands::check::run(template, dir, json, cli.verbose)
        }
        Commands::List { dir, json } => commands::list::run(dir, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
