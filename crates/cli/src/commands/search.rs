//! CLI command to search the Steam market and group the hits by item.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use skinscan_comparison::WearTier;
use skinscan_core::ConfigLoader;
use skinscan_steam::{group_by_base, SearchGroup, SteamClient, SteamClientConfig, DEFAULT_ICON_SIZE};

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search text, e.g. "redline".
    pub query: String,

    /// Number of hits to request (at most 100).
    #[arg(long, default_value = "48")]
    pub count: u32,

    /// Config file path.
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: PathBuf,
}

/// Runs a market search and prints one block per base item.
pub async fn run_search(args: SearchArgs) -> Result<()> {
    let config = ConfigLoader::load_from(&args.config)?;
    let steam = SteamClient::new(SteamClientConfig::from(&config.steam))?;

    let results = steam.search_items(&args.query, args.count).await?;
    let groups = group_by_base(&results);

    println!(
        "\n=== Steam search: \"{}\" ({} hits, {} items) ===\n",
        args.query.trim(),
        results.len(),
        groups.len()
    );

    for group in &groups {
        print_group(group);
    }

    Ok(())
}

fn print_group(group: &SearchGroup) {
    let default_wear = group.default_wear();

    println!("{}", group.base_name);
    println!("  Wears:     {}", format_wears(&group.seen_wears));
    println!("  Editions:  {}", format_editions(group));
    println!(
        "  Default:   {}",
        group.market_hash_name(default_wear, false)
    );
    if let Some(url) = group.image_url(DEFAULT_ICON_SIZE) {
        println!("  Image:     {url}");
    }
    println!();
}

fn format_wears(wears: &[WearTier]) -> String {
    if wears.is_empty() {
        return "-".to_string();
    }
    wears
        .iter()
        .map(|w| w.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_editions(group: &SearchGroup) -> &'static str {
    match (group.seen_nonstattrak, group.seen_stattrak) {
        (true, true) => "normal, StatTrak",
        (false, true) => "StatTrak",
        _ => "normal",
    }
}
