//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "banshee")]
#[command(about = "Curated roll feed tools", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a feed and emit the rolls as JSON
    Parse {
        /// Feed file to read ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Report which feed lines parse and why the rest are dropped
    Check {
        /// Feed file to read ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },
}
