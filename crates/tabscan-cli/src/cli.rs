//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tabscan: tabular ingestion and inspection pipeline
#[derive(Parser)]
#[command(name = "tabscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a data file and print its inspection report
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to coerce to dates
        #[arg(long, default_value = "Date")]
        date_column: String,

        /// Output the report as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Serve the dataset and quality metrics over HTTP
    Serve {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Port for the HTTP server
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Column to coerce to dates
        #[arg(long, default_value = "Date")]
        date_column: String,

        /// JSON file with named numeric metrics to expose at /api/metrics
        #[arg(long)]
        metrics: Option<PathBuf>,
    },
}
