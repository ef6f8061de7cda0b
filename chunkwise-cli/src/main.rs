//! chunkwise command-line entry point

use anyhow::Result;
use chunkwise_cli::commands::Commands;
use clap::Parser;

/// Split text documents into token-budgeted chunks for LLM context windows
#[derive(Debug, Parser)]
#[command(name = "chunkwise", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
