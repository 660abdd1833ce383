//! Fallible price coercion.
//!
//! Marketplaces hand back prices as formatted text (`"$1,234.56"`,
//! `"12,34€"`) or as loosely typed JSON. Anything that does not coerce to a
//! number becomes `None` rather than an error.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Parses a price out of display text.
///
/// Keeps digits, `.` and `,`. When both separators are present the comma is
/// a thousands separator and must precede the decimal point; a comma after
/// the point (`1.234,56`) is rejected. A lone comma is a decimal separator.
#[must_use]
pub fn parse_price_text(text: &str) -> Option<Decimal> {
    let kept: String = text
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    if kept.is_empty() {
        return None;
    }

    let normalized = if let Some(dot) = kept.rfind('.') {
        if kept.rfind(',').is_some_and(|comma| comma > dot) {
            return None;
        }
        kept.replace(',', "")
    } else {
        kept.replace(',', ".")
    };

    parse_decimal(&normalized)
}

/// Coerces a JSON value to a price.
///
/// Numbers and numeric strings parse; everything else is `None`.
#[must_use]
pub fn parse_price_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
