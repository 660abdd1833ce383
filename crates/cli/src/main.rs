use clap::{Parser, Subcommand};

mod commands;

use commands::{CheckArgs, FeesArgs, ParseArgs, SearchArgs};

#[derive(Parser)]
#[command(name = "skinscan")]
#[command(about = "Compare CS2 item prices between Steam and Skinport", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare Steam and Skinport prices for every item on a watchlist
    Check(CheckArgs),
    /// Search the Steam market and group hits by item
    Search(SearchArgs),
    /// Show buyer total and seller net for a price on a marketplace
    Fees(FeesArgs),
    /// Show how a market hash name is decomposed
    Parse(ParseArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check(args) => commands::run_check(args).await?,
        Commands::Search(args) => commands::run_search(args).await?,
        Commands::Fees(args) => commands::run_fees(&args)?,
        Commands::Parse(args) => commands::run_parse(&args),
    }

    Ok(())
}
