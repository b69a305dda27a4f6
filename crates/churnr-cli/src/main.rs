//! CLI application for credit-card offer churn analysis.

mod commands;
mod fetch;
mod ledger;
mod render;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{extract, report};

/// Credit-card churn analyzer - extract, score, and rank signup offers
#[derive(Parser)]
#[command(name = "churnr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the combined HTML offers report
    Report(report::ReportArgs),

    /// Extract and score offers from one source
    Extract(extract::ExtractArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Report(args) => report::run(args).await,
        Commands::Extract(args) => extract::run(args).await,
    }
}
