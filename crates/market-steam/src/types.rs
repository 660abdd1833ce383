//! Data models for the Steam Community Market endpoints.
//!
//! Raw types mirror the JSON Steam returns and are deliberately lenient:
//! every field is optional and unknown fields are ignored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use skinscan_comparison::{ItemIdentifier, WearTier};
use skinscan_core::parse_price_text;

use crate::search::strip_html;

// =============================================================================
// Price Overview
// =============================================================================

/// Response of `/market/priceoverview/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPriceOverview {
    #[serde(default)]
    pub success: bool,
    pub lowest_price: Option<String>,
    pub median_price: Option<String>,
    pub volume: Option<String>,
}

impl RawPriceOverview {
    /// Returns the lowest listing price, falling back to the median.
    ///
    /// Empty strings count as missing.
    #[must_use]
    pub fn price_text(&self) -> Option<&str> {
        non_empty(self.lowest_price.as_deref()).or_else(|| non_empty(self.median_price.as_deref()))
    }

    /// Parses the preferred price text.
    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        self.price_text().and_then(parse_price_text)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

// =============================================================================
// Market Search
// =============================================================================

/// Response of `/market/search/render/?norender=1`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub results: Option<Vec<RawSearchItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchItem {
    pub hash_name: Option<String>,
    pub market_hash_name: Option<String>,
    pub name: Option<String>,
    pub sell_price_text: Option<String>,
    pub sell_listings: Option<u64>,
    pub asset_description: Option<RawAssetDescription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAssetDescription {
    pub icon_url: Option<String>,
}

impl RawSearchItem {
    /// Best available identifier: `hash_name`, then `market_hash_name`,
    /// then `name`.
    fn identifier(&self) -> Option<&str> {
        [&self.hash_name, &self.market_hash_name, &self.name]
            .into_iter()
            .find_map(|s| non_empty(s.as_deref()))
    }
}

/// A parsed market search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub market_hash_name: String,
    pub base_name: String,
    pub wear: Option<WearTier>,
    pub is_stattrak: bool,
    pub is_souvenir: bool,
    /// Display name with markup removed.
    pub name: String,
    pub sell_price_text: String,
    pub sell_listings: Option<u64>,
    pub icon_url: Option<String>,
}

impl SearchResult {
    /// Converts a raw hit. Hits without any name are dropped.
    #[must_use]
    pub fn from_raw(raw: RawSearchItem) -> Option<Self> {
        let market_hash_name = raw.identifier()?.to_string();
        let id = ItemIdentifier::parse(&market_hash_name);

        let name = strip_html(raw.name.as_deref().unwrap_or_default());
        let name = if name.is_empty() {
            market_hash_name.clone()
        } else {
            name
        };

        Some(Self {
            base_name: id.base_name,
            wear: id.wear,
            is_stattrak: id.is_stattrak,
            is_souvenir: id.is_souvenir,
            name,
            sell_price_text: strip_html(raw.sell_price_text.as_deref().unwrap_or_default()),
            sell_listings: raw.sell_listings,
            icon_url: raw
                .asset_description
                .and_then(|d| d.icon_url)
                .filter(|u| !u.is_empty()),
            market_hash_name,
        })
    }

    /// Parses the listed sell price.
    #[must_use]
    pub fn sell_price(&self) -> Option<Decimal> {
        parse_price_text(&self.sell_price_text)
    }
}
