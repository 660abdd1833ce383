//! Error types for Steam Community Market access.

use thiserror::Error;

/// Errors that can occur when querying the Steam Community Market.
#[derive(Debug, Error)]
pub enum SteamError {
    /// API request failed with a non-success status.
    #[error("API error: {status_code} - {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Response body excerpt.
        message: String,
    },

    /// Steam throttled the request.
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimit {
        /// Seconds to wait before retry.
        retry_after_secs: u64,
    },

    /// Steam answered with `success: false`.
    #[error("lookup unsuccessful for {market_hash_name}")]
    Unsuccessful {
        market_hash_name: String,
    },

    /// The response carried no usable price.
    #[error("no price for {market_hash_name}")]
    NoPrice {
        market_hash_name: String,
    },

    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl SteamError {
    /// Creates an API error from status code and message.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a rate limit error.
    pub fn rate_limit(retry_after_secs: u64) -> Self {
        Self::RateLimit { retry_after_secs }
    }

    pub fn unsuccessful(market_hash_name: impl Into<String>) -> Self {
        Self::Unsuccessful {
            market_hash_name: market_hash_name.into(),
        }
    }

    pub fn no_price(market_hash_name: impl Into<String>) -> Self {
        Self::NoPrice {
            market_hash_name: market_hash_name.into(),
        }
    }

    /// Returns true if the error indicates the request could succeed later.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) | Self::RateLimit { .. } => true,
            Self::Api { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SteamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SteamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for Steam operations.
pub type Result<T> = std::result::Result<T, SteamError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Error Construction Tests ====================

    #[test]
    fn test_api_error_construction() {
        let err = SteamError::api(400, "bad request");
        assert!(matches!(
            err,
            SteamError::Api {
                status_code: 400,
                ..
            }
        ));
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("bad request"));
    }

    #[test]
    fn test_rate_limit_error_construction() {
        let err = SteamError::rate_limit(60);
        assert!(err.to_string().contains("60"));
    }

    #[test]
    fn test_lookup_errors_name_the_item() {
        let err = SteamError::unsuccessful("AK-47 | Redline (Field-Tested)");
        assert!(err.to_string().contains("AK-47 | Redline"));

        let err = SteamError::no_price("AWP | Asiimov (Field-Tested)");
        assert!(err.to_string().contains("AWP | Asiimov"));
    }

    // ==================== Transient Tests ====================

    #[test]
    fn test_network_and_timeout_are_transient() {
        assert!(SteamError::Network("connection refused".to_string()).is_transient());
        assert!(SteamError::Timeout("timed out".to_string()).is_transient());
        assert!(SteamError::rate_limit(30).is_transient());
    }

    #[test]
    fn test_server_error_is_transient() {
        assert!(SteamError::api(502, "bad gateway").is_transient());
        assert!(!SteamError::api(404, "not found").is_transient());
    }

    #[test]
    fn test_lookup_errors_are_not_transient() {
        assert!(!SteamError::unsuccessful("x").is_transient());
        assert!(!SteamError::no_price("x").is_transient());
        assert!(!SteamError::Serialization("bad json".to_string()).is_transient());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: SteamError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, SteamError::Serialization(_)));
    }
}
