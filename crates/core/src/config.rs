use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub steam: SteamConfig,
    pub skinport: SkinportConfig,
    pub check: CheckConfig,
    /// Path of the fee schedule document.
    pub fees_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub requests_per_minute: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinportConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Maximum number of watchlist entries checked per run.
    pub max_items: usize,
    /// Pause after each Steam lookup, in seconds.
    pub delay_secs: f64,
    /// Steam does not display prices above this value.
    pub display_cap_usd: Decimal,
    pub show_debug: bool,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://steamcommunity.com".to_string(),
            timeout_secs: 15,
            requests_per_minute: 60,
        }
    }
}

impl Default for SkinportConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.skinport.com".to_string(),
            timeout_secs: 25,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_items: 50,
            delay_secs: 0.2,
            display_cap_usd: dec!(2000),
            show_debug: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            steam: SteamConfig::default(),
            skinport: SkinportConfig::default(),
            check: CheckConfig::default(),
            fees_path: "config/fees.yaml".to_string(),
        }
    }
}

// =============================================================================
// Fee Schedule
// =============================================================================

/// Per-marketplace fee overrides. Absent rates fall back to the
/// marketplace defaults in the fee model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketFees {
    /// Extra fraction a buyer pays on top of the listing price.
    #[serde(default)]
    pub buyer_extra_rate: Option<Decimal>,
    /// Fraction of the sale price kept by the marketplace.
    #[serde(default)]
    pub seller_fee_rate: Option<Decimal>,
}

/// Fee schedule keyed by marketplace name (`steam`, `skinport`, ...).
///
/// Loaded once per run and treated as read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub market_fees: HashMap<String, MarketFees>,
}

impl FeeSchedule {
    /// Returns the configured fees for a marketplace, if any.
    #[must_use]
    pub fn market(&self, name: &str) -> Option<&MarketFees> {
        self.market_fees.get(name)
    }

    /// Sets or replaces the fees for a marketplace.
    #[must_use]
    pub fn with_market(mut self, name: impl Into<String>, fees: MarketFees) -> Self {
        self.market_fees.insert(name.into(), fees);
        self
    }
}
