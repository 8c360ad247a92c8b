//! # mdx CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Mobility Data Exchange CLI.
///
/// Operational checks for the event-taxonomy mapping core: verifies the
/// dialect translation, schema migration, and status derivation tables
/// before a deployment may serve traffic.
#[derive(Parser, Debug)]
#[command(name = "mdx", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Vocabulary and mapping-table operations.
    Vocab(mdx_cli::vocab::VocabArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Vocab(args) => mdx_cli::vocab::run(args),
    }
}
