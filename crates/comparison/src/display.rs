//! Display capping for reference prices.
//!
//! Steam does not show prices above a ceiling. Values over the cap are
//! replaced with a sentinel rather than printed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};

use skinscan_core::parse_price_value;

/// Sentinel shown for prices above the cap.
pub const EXCEEDS_LIMIT: &str = "exceeds limit";

/// Default display ceiling in USD.
pub const STEAM_DISPLAY_CAP_USD: Decimal = dec!(2000);

/// A price ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPrice {
    Price(Decimal),
    ExceedsLimit,
}

impl DisplayPrice {
    /// Returns the price if it was within the cap.
    #[must_use]
    pub fn price(self) -> Option<Decimal> {
        match self {
            Self::Price(p) => Some(p),
            Self::ExceedsLimit => None,
        }
    }
}

impl std::fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Price(p) => write!(f, "{p}"),
            Self::ExceedsLimit => f.write_str(EXCEEDS_LIMIT),
        }
    }
}

impl Serialize for DisplayPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Price(p) => Serialize::serialize(p, serializer),
            Self::ExceedsLimit => serializer.serialize_str(EXCEEDS_LIMIT),
        }
    }
}

/// Caps a price for display. A price equal to the cap is shown as-is.
#[must_use]
pub fn cap_display(price: Option<Decimal>, cap: Decimal) -> Option<DisplayPrice> {
    let price = price?;
    if price > cap {
        Some(DisplayPrice::ExceedsLimit)
    } else {
        Some(DisplayPrice::Price(price))
    }
}

/// Caps a loosely typed value. Values that do not parse as a number are
/// treated as absent.
#[must_use]
pub fn cap_display_value(value: &serde_json::Value, cap: Decimal) -> Option<DisplayPrice> {
    cap_display(parse_price_value(value), cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cap_display_at_cap() {
        assert_eq!(
            cap_display(Some(dec!(2000.0)), dec!(2000.0)),
            Some(DisplayPrice::Price(dec!(2000.0)))
        );
    }

    #[test]
    fn test_cap_display_above_cap() {
        assert_eq!(
            cap_display(Some(dec!(2000.01)), dec!(2000.0)),
            Some(DisplayPrice::ExceedsLimit)
        );
    }

    #[test]
    fn test_cap_display_absent() {
        assert_eq!(cap_display(None, STEAM_DISPLAY_CAP_USD), None);
    }

    #[test]
    fn test_cap_display_value_non_numeric() {
        assert_eq!(cap_display_value(&json!("n/a"), dec!(2000)), None);
        assert_eq!(cap_display_value(&json!(null), dec!(2000)), None);
        assert_eq!(cap_display_value(&json!([1]), dec!(2000)), None);
    }

    #[test]
    fn test_cap_display_value_numeric() {
        assert_eq!(
            cap_display_value(&json!(12.5), dec!(2000)),
            Some(DisplayPrice::Price(dec!(12.5)))
        );
        assert_eq!(
            cap_display_value(&json!("2500"), dec!(2000)),
            Some(DisplayPrice::ExceedsLimit)
        );
    }

    #[test]
    fn test_display_price_formatting() {
        assert_eq!(DisplayPrice::ExceedsLimit.to_string(), "exceeds limit");
        assert_eq!(DisplayPrice::Price(dec!(12.34)).to_string(), "12.34");
        assert_eq!(DisplayPrice::ExceedsLimit.price(), None);
    }

    #[test]
    fn test_display_price_serializes_price() {
        let json = serde_json::to_string(&DisplayPrice::Price(dec!(12.34))).unwrap();
        assert!(json.contains("12.34"));
        assert_ne!(json, "\"exceeds limit\"");
    }

    #[test]
    fn test_display_price_serializes_sentinel() {
        let json = serde_json::to_string(&DisplayPrice::ExceedsLimit).unwrap();
        assert_eq!(json, "\"exceeds limit\"");
    }
}
