//! Skinport public REST client.
//!
//! The items endpoint returns the whole CS2 catalog in one response, so the
//! client fetches it once per run and hands out a snapshot.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use skinscan_core::{CatalogEntry, CatalogSource, SkinportConfig};

use crate::models::{parse_items, SkinportItem};

/// Default Skinport API base URL.
pub const SKINPORT_API_URL: &str = "https://api.skinport.com";

/// Counter-Strike 2 app id.
pub const CS2_APP_ID: u32 = 730;

const ITEMS_PATH: &str = "/v1/items";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// Skinport REST client.
#[derive(Debug, Clone)]
pub struct SkinportClient {
    /// HTTP client
    http: Client,
    /// Base URL for API
    base_url: String,
    /// Listing currency
    currency: String,
}

impl SkinportClient {
    /// Creates a new client with default settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(&SkinportConfig::default())
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_config(config: &SkinportConfig) -> Result<Self> {
        // Skinport serves Brotli; reqwest decodes it transparently.
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(BROWSER_USER_AGENT)
            .brotli(true)
            .gzip(true)
            .build()
            .context("failed to build Skinport HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            currency: "USD".to_string(),
        })
    }

    /// Sets a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gets every tradable CS2 item with its price summary.
    ///
    /// # Errors
    /// Returns error on transport failure, a non-success status, or a body
    /// that is not a JSON array.
    pub async fn get_items(&self) -> Result<Vec<SkinportItem>> {
        let url = format!("{}{}", self.base_url, ITEMS_PATH);
        let app_id = CS2_APP_ID.to_string();
        let query = [
            ("app_id", app_id.as_str()),
            ("currency", self.currency.as_str()),
            ("tradable", "true"),
        ];
        tracing::debug!(url = %url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(&query)
            .send()
            .await
            .context("Skinport request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let excerpt: String = text.chars().take(300).collect();
            return Err(anyhow!("API error {}: {}", status, excerpt));
        }

        let payload: Value = response
            .json()
            .await
            .context("Skinport response was not valid JSON")?;

        let items = parse_items(&payload)
            .ok_or_else(|| anyhow!("Skinport response was not a list: {}", kind_of(&payload)))?;

        tracing::debug!(items = items.len(), "Fetched Skinport items");
        Ok(items)
    }

    /// Gets the catalog as matcher entries.
    ///
    /// # Errors
    /// Same as [`SkinportClient::get_items`].
    pub async fn get_catalog(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self
            .get_items()
            .await?
            .into_iter()
            .map(CatalogEntry::from)
            .collect())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl CatalogSource for SkinportClient {
    async fn fetch_catalog(&self) -> Vec<CatalogEntry> {
        match self.get_catalog().await {
            Ok(catalog) => {
                tracing::info!(entries = catalog.len(), "Loaded Skinport catalog");
                catalog
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "Skinport catalog unavailable");
                Vec::new()
            }
        }
    }
}
