//! Error types for configuration loading.
//!
//! Configuration problems are fatal: they are returned to the caller of the
//! loader instead of being degraded like price lookups.

use thiserror::Error;

/// Errors that can occur while loading application or fee configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {path}")]
    MissingFile {
        /// Path that was looked up.
        path: String,
    },

    /// The document could not be parsed or has the wrong shape.
    #[error("malformed configuration in {path}: {message}")]
    Malformed {
        /// Path of the offending document.
        path: String,
        /// Parser message.
        message: String,
    },

    /// A value parsed but is not acceptable.
    #[error("invalid configuration value for {field}: {message}")]
    Invalid {
        /// Dotted name of the field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing file error.
    pub fn missing_file(path: impl Into<String>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    /// Creates a malformed document error.
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_display() {
        let err = ConfigError::missing_file("config/fees.yaml");
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("config/fees.yaml"));
    }

    #[test]
    fn test_malformed_display() {
        let err = ConfigError::malformed("fees.yaml", "missing field `market_fees`");
        let display = err.to_string();
        assert!(display.contains("fees.yaml"));
        assert!(display.contains("market_fees"));
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::invalid("check.delay_secs", "must be non-negative");
        assert!(err.to_string().contains("check.delay_secs"));
    }
}
