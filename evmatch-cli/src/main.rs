//! evmatch command-line entry point

use clap::Parser;
use evmatch_cli::commands::Commands;

/// Event-level IoU matching of ground-truth and predicted label sequences
#[derive(Debug, Parser)]
#[command(name = "evmatch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
