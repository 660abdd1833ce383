//! Cross-marketplace price comparison for CS2 items.
//!
//! Compares Steam Community Market reference prices against the cheapest
//! matching Skinport listing for each identifier on a watchlist.
//!
//! # Overview
//!
//! ```text
//! watchlist ──► identifier parser ──► row components
//!     │
//!     ├──► Steam price source ──────────► steam_usd
//!     └──► catalog matcher (snapshot) ──► skinport_min_usd
//!
//! spread = steam_usd - skinport_min_usd
//! ```
//!
//! # Modules
//!
//! - [`identifier`]: Parse and compose market hash names
//! - [`matcher`]: Fuzzy catalog lookup
//! - [`fees`]: Buyer and seller fee model
//! - [`display`]: Display capping for reference prices
//! - [`checker`]: Watchlist comparison run
//! - [`watchlist`]: Caller-owned identifier list
//!
//! # Example
//!
//! ```ignore
//! use skinscan_comparison::{CheckerConfig, PriceChecker, Watchlist};
//!
//! let mut watchlist = Watchlist::new();
//! watchlist.add("AK-47 | Redline (Field-Tested)");
//!
//! let catalog = skinport.fetch_catalog().await;
//! let report = PriceChecker::with_config(CheckerConfig::default())
//!     .run(&watchlist, &catalog, &steam)
//!     .await;
//!
//! for row in &report.rows {
//!     println!("{} spread {:?}", row.market_hash_name, row.spread_usd);
//! }
//! ```

pub mod checker;
pub mod display;
pub mod fees;
pub mod identifier;
pub mod matcher;
pub mod types;
pub mod watchlist;

// Re-export main types for convenience
pub use checker::{
    rank_rows, spread, CheckSummary, CheckerConfig, ComparisonReport, ComparisonRow, PriceChecker,
};
pub use display::{cap_display, cap_display_value, DisplayPrice, EXCEEDS_LIMIT, STEAM_DISPLAY_CAP_USD};
pub use fees::{buyer_total, seller_net, FeeCalculator, RoundTrip};
pub use identifier::{ItemIdentifier, SOUVENIR_PREFIX, STATTRAK_PREFIX};
pub use matcher::{find_best_price, CatalogMatcher, MatchCandidate, PriceMatch, NO_CANDIDATES};
pub use types::{Marketplace, UnknownName, WearTier};
pub use watchlist::Watchlist;
