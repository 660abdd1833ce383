//! Watchlist price comparison run.
//!
//! For each watched identifier the checker matches the Skinport catalog
//! snapshot, fetches the Steam reference price, and computes the spread.
//! Items are processed one at a time with a pause between Steam lookups.

use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

use skinscan_core::{CatalogEntry, CheckConfig, FeeSchedule, ReferencePriceSource};

use crate::display::{cap_display, DisplayPrice, STEAM_DISPLAY_CAP_USD};
use crate::fees::{buyer_total, seller_net};
use crate::identifier::ItemIdentifier;
use crate::matcher::find_best_price;
use crate::types::{Marketplace, WearTier};
use crate::watchlist::Watchlist;

// =============================================================================
// Checker Configuration
// =============================================================================

/// Settings for a comparison run.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Only the first `max_items` watchlist entries are checked.
    pub max_items: usize,
    /// Pause between Steam lookups.
    pub delay: Duration,
    /// Attach the matcher's reason to each row.
    pub include_debug: bool,
    /// Steam display ceiling.
    pub display_cap: Decimal,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_items: 50,
            delay: Duration::from_millis(200),
            include_debug: false,
            display_cap: STEAM_DISPLAY_CAP_USD,
        }
    }
}

impl CheckerConfig {
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, include_debug: bool) -> Self {
        self.include_debug = include_debug;
        self
    }

    #[must_use]
    pub fn with_display_cap(mut self, cap: Decimal) -> Self {
        self.display_cap = cap;
        self
    }
}

impl From<&CheckConfig> for CheckerConfig {
    fn from(config: &CheckConfig) -> Self {
        Self {
            max_items: config.max_items,
            // negative or non-finite delays disable pacing
            delay: Duration::try_from_secs_f64(config.delay_secs).unwrap_or(Duration::ZERO),
            include_debug: config.show_debug,
            display_cap: config.display_cap_usd,
        }
    }
}

// =============================================================================
// Rows
// =============================================================================

/// One compared identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub base_name: String,
    pub wear: Option<WearTier>,
    pub stattrak: bool,
    pub market_hash_name: String,
    /// Steam reference price.
    pub steam_usd: Option<Decimal>,
    /// Cheapest matching Skinport listing.
    pub skinport_min_usd: Option<Decimal>,
    /// `steam_usd - skinport_min_usd`, when both are known.
    pub spread_usd: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_debug: Option<String>,
    /// Steam price capped for display.
    #[serde(skip)]
    pub steam_display: Option<DisplayPrice>,
}

impl ComparisonRow {
    /// Builds a row from an identifier and the two looked-up prices.
    #[must_use]
    pub fn new(
        identifier: &ItemIdentifier,
        steam_usd: Option<Decimal>,
        skinport_min_usd: Option<Decimal>,
        display_cap: Decimal,
    ) -> Self {
        Self {
            base_name: identifier.base_name.clone(),
            wear: identifier.wear,
            stattrak: identifier.is_stattrak,
            market_hash_name: identifier.raw.clone(),
            steam_usd,
            skinport_min_usd,
            spread_usd: spread(steam_usd, skinport_min_usd),
            match_debug: None,
            steam_display: cap_display(steam_usd, display_cap),
        }
    }

    #[must_use]
    pub fn with_match_debug(mut self, reason: Option<String>) -> Self {
        self.match_debug = reason;
        self
    }

    /// Profit of buying on Skinport and selling on Steam after fees.
    #[must_use]
    pub fn net_spread(&self, schedule: &FeeSchedule) -> Option<Decimal> {
        let steam = self.steam_usd?;
        let skinport = self.skinport_min_usd?;
        Some(
            seller_net(Marketplace::Steam.as_str(), steam, schedule)
                - buyer_total(Marketplace::Skinport.as_str(), skinport, schedule),
        )
    }
}

/// Difference between the reference and secondary price.
#[must_use]
pub fn spread(steam: Option<Decimal>, skinport: Option<Decimal>) -> Option<Decimal> {
    Some(steam? - skinport?)
}

/// Sorts rows by spread descending with absent spreads last.
///
/// Stable: rows with equal spreads keep their input order.
pub fn rank_rows(rows: &mut [ComparisonRow]) {
    rows.sort_by(|a, b| compare_spread(a.spread_usd, b.spread_usd));
}

fn compare_spread(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// =============================================================================
// Report
// =============================================================================

/// Aggregate counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Identifiers checked.
    pub checked: usize,
    /// Rows with a Steam price.
    pub steam_ok: usize,
    /// Rows with a Skinport price.
    pub skinport_ok: usize,
}

impl CheckSummary {
    #[must_use]
    pub fn from_rows(rows: &[ComparisonRow]) -> Self {
        Self {
            checked: rows.len(),
            steam_ok: rows.iter().filter(|r| r.steam_usd.is_some()).count(),
            skinport_ok: rows.iter().filter(|r| r.skinport_min_usd.is_some()).count(),
        }
    }
}

/// Ranked rows and their summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
    pub summary: CheckSummary,
}

impl ComparisonReport {
    /// Ranks the rows and computes the summary.
    #[must_use]
    pub fn from_rows(mut rows: Vec<ComparisonRow>) -> Self {
        rank_rows(&mut rows);
        let summary = CheckSummary::from_rows(&rows);
        Self { rows, summary }
    }

    /// Rows where Steam is more expensive than Skinport.
    pub fn positive_spreads(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows
            .iter()
            .filter(|r| r.spread_usd.is_some_and(|s| s > Decimal::ZERO))
    }
}

// =============================================================================
// Price Checker
// =============================================================================

/// Runs comparisons over a watchlist.
#[derive(Debug, Clone, Default)]
pub struct PriceChecker {
    config: CheckerConfig,
}

impl PriceChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CheckerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Compares the first `max_items` watchlist entries.
    ///
    /// Produces exactly one row per checked identifier. Failed lookups show
    /// up as absent prices, never as errors.
    pub async fn run<S>(
        &self,
        watchlist: &Watchlist,
        catalog: &[CatalogEntry],
        steam: &S,
    ) -> ComparisonReport
    where
        S: ReferencePriceSource + ?Sized,
    {
        let items = watchlist.take(self.config.max_items);
        info!(
            items = items.len(),
            catalog = catalog.len(),
            "Starting price comparison"
        );

        let mut rows = Vec::with_capacity(items.len());
        for (idx, name) in items.iter().enumerate() {
            if idx > 0 && !self.config.delay.is_zero() {
                sleep(self.config.delay).await;
            }
            rows.push(self.check_one(name, catalog, steam).await);
        }

        let report = ComparisonReport::from_rows(rows);
        info!(
            checked = report.summary.checked,
            steam_ok = report.summary.steam_ok,
            skinport_ok = report.summary.skinport_ok,
            "Price comparison complete"
        );
        report
    }

    async fn check_one<S>(&self, name: &str, catalog: &[CatalogEntry], steam: &S) -> ComparisonRow
    where
        S: ReferencePriceSource + ?Sized,
    {
        let identifier = ItemIdentifier::parse(name);
        let matched = find_best_price(catalog, name, true);
        let steam_usd = steam.fetch_price(name).await;

        debug!(
            item = %name,
            steam = ?steam_usd,
            skinport = ?matched.price,
            reason = ?matched.reason,
            "Checked item"
        );

        let reason = if self.config.include_debug {
            matched.reason
        } else {
            None
        };
        ComparisonRow::new(&identifier, steam_usd, matched.price, self.config.display_cap)
            .with_match_debug(reason)
    }
}
