//! Backend API connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "nyaya/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin, without a trailing `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. A request exceeding it fails as "timed out".
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL with any trailing slashes removed.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject settings that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty base URL, a base URL
    /// without an `http`/`https` scheme, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origin = self.origin();
        if origin.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{origin}' must start with http:// or https://"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn origin_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://api.example.in//".into(),
            ..Default::default()
        };
        assert_eq!(config.origin(), "https://api.example.in");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.timeout_secs"));
    }

    #[test]
    fn schemeless_base_url_is_rejected() {
        let config = ApiConfig {
            base_url: "localhost:5000".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
