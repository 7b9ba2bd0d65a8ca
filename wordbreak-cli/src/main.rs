//! wordbreak command-line entry point

use anyhow::Result;
use clap::Parser;
use wordbreak_cli::commands::Commands;

/// Split text at word boundaries using a declarative rule grammar
#[derive(Debug, Parser)]
#[command(name = "wordbreak", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
