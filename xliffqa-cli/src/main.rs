//! xliffqa command-line entry point

use anyhow::Result;
use clap::Parser;
use xliffqa_cli::commands::{list, Commands};

/// Deterministic QA checks for XLIFF and SDLXLIFF translations
#[derive(Debug, Parser)]
#[command(name = "xliffqa", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => args.execute(),
        Commands::Count(args) => args.execute(),
        Commands::Check(args) => args.execute().await,
        Commands::List { subcommand } => list::execute(subcommand),
        Commands::GenerateConfig(args) => args.execute(),
    }
}
