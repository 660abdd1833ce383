//! CLI command to compare watchlist prices between Steam and Skinport.
//!
//! Loads the Skinport catalog once, then looks up each watched item on
//! Steam in sequence and prints the ranked spreads.

use anyhow::{bail, Result};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Duration;

use skinscan_comparison::{CheckerConfig, ComparisonReport, ComparisonRow, DisplayPrice, PriceChecker};
use skinscan_core::{CatalogSource, ConfigLoader, FeeSchedule};
use skinscan_data::{read_watchlist, CsvExporter};
use skinscan_skinport::SkinportClient;
use skinscan_steam::{SteamClient, SteamClientConfig};

/// Bounds applied to `--max-items`.
const MAX_ITEMS_RANGE: std::ops::RangeInclusive<usize> = 1..=500;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Watchlist file, one market hash name per line.
    #[arg(short, long)]
    pub watchlist: PathBuf,

    /// Maximum number of items to check (1-500). Defaults to the config value.
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Seconds to wait between Steam lookups. Defaults to the config value.
    #[arg(long)]
    pub delay: Option<f64>,

    /// Include the matcher's reason for each Skinport price.
    #[arg(long)]
    pub debug: bool,

    /// Write results to this CSV file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path.
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: PathBuf,

    /// Fee schedule path. Defaults to the config value.
    #[arg(long)]
    pub fees: Option<PathBuf>,
}

/// Runs the comparison.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let config = ConfigLoader::load_from(&args.config)?;
    let fees_path = args
        .fees
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.fees_path));
    let schedule = ConfigLoader::load_fees(&fees_path)?;

    let checker_config = checker_config(&args, CheckerConfig::from(&config.check))?;

    let watchlist = read_watchlist(&args.watchlist)?;
    if watchlist.is_empty() {
        bail!("Watchlist is empty: {}", args.watchlist.display());
    }

    println!("\n=== CS2 Price Check ===\n");
    println!(
        "Checking {} of {} items (delay {:?})",
        watchlist.len().min(checker_config.max_items),
        watchlist.len(),
        checker_config.delay
    );

    let skinport = SkinportClient::with_config(&config.skinport)?;
    let catalog = skinport.fetch_catalog().await;
    if catalog.is_empty() {
        println!("Skinport catalog unavailable; Skinport prices will be empty.");
    }

    let steam = SteamClient::new(SteamClientConfig::from(&config.steam))?;
    let include_debug = checker_config.include_debug;
    let report = PriceChecker::with_config(checker_config)
        .run(&watchlist, &catalog, &steam)
        .await;

    print_report(&report, &schedule, include_debug);

    if let Some(output) = &args.output {
        CsvExporter::write_rows(output, &report.rows, include_debug)?;
        println!("\nSaved results to {}", output.display());
    }

    Ok(())
}

/// Applies command-line overrides to the configured settings.
fn checker_config(args: &CheckArgs, base: CheckerConfig) -> Result<CheckerConfig> {
    let debug = args.debug || base.include_debug;
    let mut config = base.with_debug(debug);

    if let Some(max_items) = args.max_items {
        config = config.with_max_items(max_items);
    }
    config.max_items = config
        .max_items
        .clamp(*MAX_ITEMS_RANGE.start(), *MAX_ITEMS_RANGE.end());

    if let Some(delay) = args.delay {
        let Ok(delay) = Duration::try_from_secs_f64(delay) else {
            bail!("--delay must be a non-negative number of seconds, got {delay}");
        };
        config = config.with_delay(delay);
    }

    Ok(config)
}

fn print_report(report: &ComparisonReport, schedule: &FeeSchedule, include_debug: bool) {
    println!(
        "\n{:<52} {:>14} {:>12} {:>10} {:>10}",
        "Item", "Steam", "Skinport", "Spread", "Net"
    );
    println!("{}", "-".repeat(102));

    for row in &report.rows {
        println!(
            "{:<52} {:>14} {:>12} {:>10} {:>10}",
            truncate(&row.market_hash_name, 52),
            format_display(row.steam_display),
            format_price(row.skinport_min_usd),
            format_price(row.spread_usd),
            format_price(row.net_spread(schedule)),
        );
        if include_debug {
            if let Some(reason) = &row.match_debug {
                println!("    {reason}");
            }
        }
    }

    let summary = report.summary;
    println!(
        "\nChecked: {} | Steam prices: {} | Skinport prices: {}",
        summary.checked, summary.steam_ok, summary.skinport_ok
    );

    if let Some(best) = report.positive_spreads().next() {
        print_best(best, schedule);
    }
}

fn print_best(row: &ComparisonRow, schedule: &FeeSchedule) {
    println!(
        "Largest spread: {} (${} gross, ${} after fees)",
        row.market_hash_name,
        format_price(row.spread_usd),
        format_price(row.net_spread(schedule)),
    );
}

fn format_price(price: Option<Decimal>) -> String {
    price.map_or_else(|| "-".to_string(), |p| format!("{:.2}", p))
}

fn format_display(price: Option<DisplayPrice>) -> String {
    match price {
        Some(DisplayPrice::Price(p)) => format!("{:.2}", p),
        Some(DisplayPrice::ExceedsLimit) => DisplayPrice::ExceedsLimit.to_string(),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
