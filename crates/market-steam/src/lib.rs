//! Steam Community Market integration for the price checker.
//!
//! This crate provides:
//! - REST client with rate limiting for the price overview and search endpoints
//! - Lenient models for Steam's JSON responses
//! - Grouping of search hits by base item
//!
//! # Example
//!
//! ```ignore
//! use skinscan_steam::{group_by_base, SteamClient, SteamClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SteamClient::new(SteamClientConfig::default())?;
//!
//!     let hits = client.search_items("asiimov", 48).await?;
//!     for group in group_by_base(&hits) {
//!         println!("{} {:?}", group.base_name, group.seen_wears);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /market/priceoverview/` - Lowest and median USD price of one item
//! - `GET /market/search/render/` - Market search with `norender=1`

pub mod client;
pub mod error;
pub mod search;
pub mod types;

// Re-export main types for convenience
pub use client::{SteamClient, SteamClientConfig, CS2_APP_ID, STEAM_COMMUNITY_URL};
pub use error::{Result, SteamError};
pub use search::{group_by_base, icon_image_url, strip_html, SearchGroup, DEFAULT_ICON_SIZE};
pub use types::SearchResult;
