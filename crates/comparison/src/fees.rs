//! Marketplace fee model.
//!
//! Converts listing prices into what a buyer actually pays and what a seller
//! actually receives. Rates come from the [`FeeSchedule`] when configured and
//! fall back to per-marketplace defaults otherwise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use skinscan_core::FeeSchedule;

use crate::types::Marketplace;

// =============================================================================
// Fee Constants
// =============================================================================

/// Default Steam seller fee (15%).
pub const STEAM_SELLER_FEE_RATE: Decimal = dec!(0.15);

/// Default Skinport seller fee (12%).
pub const SKINPORT_SELLER_FEE_RATE: Decimal = dec!(0.12);

/// Default Skinbaron seller fee (10%).
pub const SKINBARON_SELLER_FEE_RATE: Decimal = dec!(0.10);

impl Marketplace {
    /// Seller fee applied when the schedule does not override it.
    #[must_use]
    pub fn default_seller_fee_rate(self) -> Decimal {
        match self {
            Self::Steam => STEAM_SELLER_FEE_RATE,
            Self::Skinport => SKINPORT_SELLER_FEE_RATE,
            Self::Skinbaron => SKINBARON_SELLER_FEE_RATE,
        }
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Total a buyer pays for a listing at `price`.
///
/// Steam prices already include fees. Skinport and Skinbaron add the
/// configured `buyer_extra_rate` (default 0). Unknown marketplaces are
/// passed through unchanged.
#[must_use]
pub fn buyer_total(market: &str, price: Decimal, schedule: &FeeSchedule) -> Decimal {
    let Ok(marketplace) = market.parse::<Marketplace>() else {
        return price;
    };
    if marketplace.is_reference() {
        return price;
    }

    let extra = schedule
        .market(marketplace.as_str())
        .and_then(|fees| fees.buyer_extra_rate)
        .unwrap_or(Decimal::ZERO);
    price * (Decimal::ONE + extra)
}

/// Amount a seller receives for a sale at `price`.
///
/// Unknown marketplaces are passed through unchanged. Configured rates are
/// not range-checked.
#[must_use]
pub fn seller_net(market: &str, price: Decimal, schedule: &FeeSchedule) -> Decimal {
    let Ok(marketplace) = market.parse::<Marketplace>() else {
        return price;
    };

    let rate = schedule
        .market(marketplace.as_str())
        .and_then(|fees| fees.seller_fee_rate)
        .unwrap_or_else(|| marketplace.default_seller_fee_rate());
    price * (Decimal::ONE - rate)
}

// =============================================================================
// Fee Calculator
// =============================================================================

/// Fee calculator bound to a schedule.
#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    schedule: FeeSchedule,
}

impl FeeCalculator {
    /// Creates a calculator that uses only the default rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_schedule(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    #[must_use]
    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    #[must_use]
    pub fn buyer_total(&self, market: &str, price: Decimal) -> Decimal {
        buyer_total(market, price, &self.schedule)
    }

    #[must_use]
    pub fn seller_net(&self, market: &str, price: Decimal) -> Decimal {
        seller_net(market, price, &self.schedule)
    }

    /// Computes the result of buying on one marketplace and reselling on
    /// another.
    #[must_use]
    pub fn round_trip(
        &self,
        buy_market: &str,
        buy_price: Decimal,
        sell_market: &str,
        sell_price: Decimal,
    ) -> RoundTrip {
        let cost = self.buyer_total(buy_market, buy_price);
        let proceeds = self.seller_net(sell_market, sell_price);
        RoundTrip {
            cost,
            proceeds,
            profit: proceeds - cost,
        }
    }
}

/// Fee-adjusted buy-then-sell result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTrip {
    /// What the buyer pays.
    pub cost: Decimal,
    /// What the seller receives.
    pub proceeds: Decimal,
    pub profit: Decimal,
}

impl RoundTrip {
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.profit > Decimal::ZERO
    }
}
