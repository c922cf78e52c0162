mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            pretty,
        } => {
            commands::parse(input.as_deref(), output.as_deref(), pretty)?;
        }

        Commands::Check { input } => {
            commands::check(input.as_deref())?;
        }
    }

    Ok(())
}
