//! CityGuide CLI — the main entry point.
//!
//! Commands:
//! - `ask`    — Send a single question and print the reply
//! - `chat`   — Interactive conversation mode
//! - `status` — Show the active backend and its configuration

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "cityguide",
    about = "CityGuide — Taichung tourism assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        /// The question text
        question: String,
    },

    /// Enter interactive chat mode
    Chat,

    /// Show the active backend and its configuration
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Ask { question } => commands::ask::run(&question).await?,
        Commands::Chat => commands::chat::run().await?,
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
