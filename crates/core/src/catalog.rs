use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced listing from a bulk marketplace catalog.
///
/// `display_name` is free text as the marketplace publishes it and may carry
/// decorative glyphs (`★`) and a parenthetical wear suffix. `min_price` is
/// `None` when the marketplace gave no price or one that did not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub display_name: String,
    pub min_price: Option<Decimal>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(display_name: impl Into<String>, min_price: Option<Decimal>) -> Self {
        Self {
            display_name: display_name.into(),
            min_price,
        }
    }

    /// Creates a priced entry.
    #[must_use]
    pub fn priced(display_name: impl Into<String>, min_price: Decimal) -> Self {
        Self::new(display_name, Some(min_price))
    }

    /// Returns true if the entry carries a usable price.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.min_price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_entry_constructors() {
        let priced = CatalogEntry::priced("AK-47 | Redline (Field-Tested)", dec!(12.5));
        assert!(priced.has_price());
        assert_eq!(priced.min_price, Some(dec!(12.5)));

        let unpriced = CatalogEntry::new("AK-47 | Redline (Battle-Scarred)", None);
        assert!(!unpriced.has_price());
    }
}
