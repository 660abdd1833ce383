//! Data models for the Skinport public API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use skinscan_core::{parse_price_value, CatalogEntry};

/// One entry of `GET /v1/items`.
///
/// Only the fields the catalog needs are kept; the rest are ignored. The
/// price stays raw JSON since Skinport sends numbers, nulls, and
/// occasionally strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinportItem {
    #[serde(default)]
    pub market_hash_name: Option<String>,
    #[serde(default)]
    pub min_price: Value,
}

impl SkinportItem {
    /// Converts the item into a catalog entry.
    ///
    /// A missing name becomes an empty string; a price that does not coerce
    /// to a number becomes `None`.
    #[must_use]
    pub fn into_entry(self) -> CatalogEntry {
        let min_price = parse_price_value(&self.min_price);
        CatalogEntry::new(self.market_hash_name.unwrap_or_default(), min_price)
    }
}

impl From<SkinportItem> for CatalogEntry {
    fn from(item: SkinportItem) -> Self {
        item.into_entry()
    }
}

/// Parses an items payload leniently.
///
/// Returns `None` if the payload is not a JSON array. Array elements that
/// are not objects are skipped.
#[must_use]
pub fn parse_items(payload: &Value) -> Option<Vec<SkinportItem>> {
    let items = payload.as_array()?;
    Some(
        items
            .iter()
            .filter(|v| v.is_object())
            .filter_map(|v| serde_json::from_value::<SkinportItem>(v.clone()).ok())
            .collect(),
    )
}
