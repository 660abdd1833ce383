use crate::config::{AppConfig, FeeSchedule};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use std::path::Path;

/// Environment variable prefix for configuration overrides,
/// e.g. `SKINSCAN_CHECK__MAX_ITEMS=20`.
pub const ENV_PREFIX: &str = "SKINSCAN_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads application configuration from `config/Config.toml` merged with
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be parsed or is invalid.
    pub fn load() -> Result<AppConfig> {
        Self::load_from("config/Config.toml")
    }

    /// Loads application configuration from a specific TOML file merged with
    /// environment variables. A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be parsed or is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        let path = path.as_ref();
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::malformed(path.display().to_string(), e.to_string()))?;

        validate(&config)?;
        Ok(config)
    }

    /// Loads the fee schedule document.
    ///
    /// The document must exist and carry a top-level `market_fees` mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file does not exist and
    /// [`ConfigError::Malformed`] if it cannot be parsed.
    pub fn load_fees(path: impl AsRef<Path>) -> Result<FeeSchedule> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.is_file() {
            return Err(ConfigError::missing_file(&path_str));
        }

        let schedule: FeeSchedule = Figment::new()
            .merge(Yaml::file(path))
            .extract()
            .map_err(|e| ConfigError::malformed(&path_str, e.to_string()))?;

        tracing::debug!(
            path = %path_str,
            markets = schedule.market_fees.len(),
            "Loaded fee schedule"
        );

        Ok(schedule)
    }
}

fn validate(config: &AppConfig) -> Result<()> {
    if !config.check.delay_secs.is_finite() || config.check.delay_secs < 0.0 {
        return Err(ConfigError::invalid(
            "check.delay_secs",
            format!("must be a non-negative number, got {}", config.check.delay_secs),
        ));
    }
    if config.check.max_items == 0 {
        return Err(ConfigError::invalid("check.max_items", "must be at least 1"));
    }
    if config.steam.requests_per_minute == 0 {
        return Err(ConfigError::invalid(
            "steam.requests_per_minute",
            "must be at least 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ==================== Fee Schedule Tests ====================

    #[test]
    fn test_load_fees_full_document() {
        let file = write_temp(
            "market_fees:\n  steam:\n    seller_fee_rate: 0.13\n  skinport:\n    buyer_extra_rate: 0.02\n    seller_fee_rate: 0.08\n",
            ".yaml",
        );

        let schedule = ConfigLoader::load_fees(file.path()).unwrap();

        let steam = schedule.market("steam").unwrap();
        assert_eq!(steam.seller_fee_rate, Some(dec!(0.13)));
        assert!(steam.buyer_extra_rate.is_none());

        let skinport = schedule.market("skinport").unwrap();
        assert_eq!(skinport.buyer_extra_rate, Some(dec!(0.02)));
        assert_eq!(skinport.seller_fee_rate, Some(dec!(0.08)));
    }

    #[test]
    fn test_load_fees_empty_market_entry() {
        let file = write_temp("market_fees:\n  skinbaron: {}\n", ".yaml");

        let schedule = ConfigLoader::load_fees(file.path()).unwrap();
        assert_eq!(schedule.market("skinbaron"), Some(&Default::default()));
    }

    #[test]
    fn test_load_fees_missing_file_is_fatal() {
        let err = ConfigLoader::load_fees("/nonexistent/fees.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
        assert!(err.to_string().contains("/nonexistent/fees.yaml"));
    }

    #[test]
    fn test_load_fees_missing_market_fees_key() {
        let file = write_temp("other_key: 1\n", ".yaml");

        let err = ConfigLoader::load_fees(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn test_load_fees_malformed_rate() {
        let file = write_temp(
            "market_fees:\n  steam:\n    seller_fee_rate: [1, 2]\n",
            ".yaml",
        );

        let err = ConfigLoader::load_fees(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    // ==================== App Config Tests ====================

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = ConfigLoader::load_from("/nonexistent/Config.toml").unwrap();
        assert_eq!(config.check.max_items, 50);
        assert_eq!(config.steam.timeout_secs, 15);
    }

    #[test]
    fn test_load_from_toml_overrides() {
        let file = write_temp(
            "fees_path = \"custom/fees.yaml\"\n\n[check]\nmax_items = 10\ndelay_secs = 0.5\ndisplay_cap_usd = 1800\n",
            ".toml",
        );

        let config = ConfigLoader::load_from(file.path()).unwrap();
        assert_eq!(config.check.max_items, 10);
        assert!((config.check.delay_secs - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.check.display_cap_usd, dec!(1800));
        assert_eq!(config.fees_path, "custom/fees.yaml");
        // untouched sections keep defaults
        assert_eq!(config.skinport.timeout_secs, 25);
    }

    #[test]
    fn test_load_from_rejects_negative_delay() {
        let file = write_temp("[check]\ndelay_secs = -1.0\n", ".toml");

        let err = ConfigLoader::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_load_from_rejects_zero_max_items() {
        let file = write_temp("[check]\nmax_items = 0\n", ".toml");

        let err = ConfigLoader::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
