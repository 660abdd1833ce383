use crate::catalog::CatalogEntry;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Per-item price lookup against the reference marketplace.
///
/// Implementations swallow transport and parse failures and report them as
/// `None`; a failed lookup must never abort a comparison run.
#[async_trait]
pub trait ReferencePriceSource: Send + Sync {
    async fn fetch_price(&self, market_hash_name: &str) -> Option<Decimal>;
}

/// Bulk catalog snapshot from the secondary marketplace.
///
/// Failures yield an empty catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Vec<CatalogEntry>;
}
