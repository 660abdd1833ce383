//! Skinport marketplace integration for the price checker.
//!
//! This crate provides:
//! - REST client for the public `/v1/items` catalog endpoint
//! - Lenient item model converting to [`skinscan_core::CatalogEntry`]
//!
//! # Example
//!
//! ```no_run
//! use skinscan_skinport::SkinportClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SkinportClient::new()?;
//!
//!     let catalog = client.get_catalog().await?;
//!     println!("Loaded {} Skinport items", catalog.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod models;

// Re-export main types
pub use client::{SkinportClient, SKINPORT_API_URL};
pub use models::{parse_items, SkinportItem};
