pub mod catalog;
pub mod config;
pub mod config_loader;
pub mod error;
pub mod price;
pub mod traits;

pub use catalog::CatalogEntry;
pub use config::{AppConfig, CheckConfig, FeeSchedule, MarketFees, SkinportConfig, SteamConfig};
pub use config_loader::ConfigLoader;
pub use error::{ConfigError, Result};
pub use price::{parse_price_text, parse_price_value};
pub use traits::{CatalogSource, ReferencePriceSource};
