//! Tabscan CLI - tabular ingestion and inspection pipeline.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let result = match cli.command {
        Commands::Inspect {
            file,
            date_column,
            json,
        } => commands::inspect::run(file, date_column, json),

        Commands::Serve {
            file,
            port,
            date_column,
            metrics,
        } => commands::serve::run(file, port, date_column, metrics),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
