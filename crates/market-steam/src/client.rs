//! Steam Community Market client with rate limiting.
//!
//! Provides the two unauthenticated endpoints the price checker needs:
//! per-item price overview and market search. Requests are paced with the
//! governor crate.
//!
//! # Example
//!
//! ```ignore
//! use skinscan_steam::{SteamClient, SteamClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SteamClient::new(SteamClientConfig::default())?;
//!
//!     let price = client.get_price_overview("AK-47 | Redline (Field-Tested)").await?;
//!     println!("Lowest price: {price}");
//!
//!     let hits = client.search_items("redline", 20).await?;
//!     println!("Found {} results", hits.len());
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use rust_decimal::Decimal;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use skinscan_core::{ReferencePriceSource, SteamConfig};

use crate::error::{Result, SteamError};
use crate::types::{RawPriceOverview, RawSearchResponse, SearchResult};

// =============================================================================
// Constants
// =============================================================================

/// Steam Community base URL.
pub const STEAM_COMMUNITY_URL: &str = "https://steamcommunity.com";

/// Counter-Strike 2 app id.
pub const CS2_APP_ID: u32 = 730;

/// Steam currency code for USD.
pub const USD_CURRENCY: u32 = 1;

/// Steam rejects requests without a browser-like user agent.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

const PRICE_OVERVIEW_PATH: &str = "/market/priceoverview/";
const SEARCH_PATH: &str = "/market/search/render/";

/// Largest page the search endpoint serves.
pub const MAX_SEARCH_COUNT: u32 = 100;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the Steam client.
#[derive(Debug, Clone)]
pub struct SteamClientConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// Requests per minute limit.
    pub requests_per_minute: NonZeroU32,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SteamClientConfig {
    fn default() -> Self {
        Self {
            base_url: STEAM_COMMUNITY_URL.to_string(),
            requests_per_minute: nonzero!(60u32),
            timeout_secs: 15,
        }
    }
}

impl SteamClientConfig {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the rate limit.
    #[must_use]
    pub fn with_rate_limit(mut self, requests_per_minute: NonZeroU32) -> Self {
        self.requests_per_minute = requests_per_minute;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl From<&SteamConfig> for SteamClientConfig {
    fn from(config: &SteamConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_url: config.base_url.clone(),
            requests_per_minute: NonZeroU32::new(config.requests_per_minute)
                .unwrap_or(defaults.requests_per_minute),
            timeout_secs: config.timeout_secs,
        }
    }
}

// =============================================================================
// SteamClient
// =============================================================================

/// Steam Community Market client.
pub struct SteamClient {
    config: SteamClientConfig,
    http: Client,
    rate_limiter: Arc<
        RateLimiter<
            governor::state::NotKeyed,
            governor::state::InMemoryState,
            governor::clock::DefaultClock,
        >,
    >,
}

impl std::fmt::Debug for SteamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamClient")
            .field("base_url", &self.config.base_url)
            .field("requests_per_minute", &self.config.requests_per_minute)
            .finish_non_exhaustive()
    }
}

impl SteamClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: SteamClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| SteamError::Configuration(format!("failed to build HTTP client: {e}")))?;

        let quota = Quota::per_minute(config.requests_per_minute);
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            config,
            http,
            rate_limiter,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Sets a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Waits for the rate limiter and makes a GET request.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(url = %url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(SteamError::rate_limit(retry_after));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let excerpt: String = text.chars().take(200).collect();
            return Err(SteamError::api(status.as_u16(), excerpt));
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }

    // =========================================================================
    // Market Endpoints
    // =========================================================================

    /// Gets the current USD price of an item.
    ///
    /// Uses the lowest listing price, falling back to the median sale price.
    ///
    /// # Errors
    /// Returns error if the request fails, Steam reports `success: false`, or
    /// no price is present.
    pub async fn get_price_overview(&self, market_hash_name: &str) -> Result<Decimal> {
        let query = [
            ("appid", CS2_APP_ID.to_string()),
            ("currency", USD_CURRENCY.to_string()),
            ("market_hash_name", market_hash_name.to_string()),
        ];

        let overview: RawPriceOverview = self.get(PRICE_OVERVIEW_PATH, &query).await?;
        if !overview.success {
            return Err(SteamError::unsuccessful(market_hash_name));
        }

        overview
            .price()
            .ok_or_else(|| SteamError::no_price(market_hash_name))
    }

    /// Searches the market for CS2 items.
    ///
    /// An empty query returns no results without a request. `count` is
    /// clamped to [`MAX_SEARCH_COUNT`].
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn search_items(&self, query: &str, count: u32) -> Result<Vec<SearchResult>> {
        let q = query.trim();
        if q.is_empty() {
            return Ok(Vec::new());
        }

        let params = [
            ("query", q.to_string()),
            ("start", "0".to_string()),
            ("count", count.min(MAX_SEARCH_COUNT).to_string()),
            ("appid", CS2_APP_ID.to_string()),
            ("norender", "1".to_string()),
        ];

        let response: RawSearchResponse = self.get(SEARCH_PATH, &params).await?;
        let results: Vec<SearchResult> = response
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(SearchResult::from_raw)
            .collect();

        tracing::debug!(query = %q, results = results.len(), "Market search complete");
        Ok(results)
    }
}

#[async_trait]
impl ReferencePriceSource for SteamClient {
    async fn fetch_price(&self, market_hash_name: &str) -> Option<Decimal> {
        match self.get_price_overview(market_hash_name).await {
            Ok(price) => Some(price),
            Err(e) => {
                tracing::warn!(item = %market_hash_name, error = %e, "Steam price lookup failed");
                None
            }
        }
    }
}
