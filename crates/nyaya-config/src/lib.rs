//! # nyaya-config
//!
//! Layered configuration loading for Nyaya using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NYAYA_*` prefix, `__` as separator)
//! 2. Project-level `.nyaya/config.toml`
//! 3. User-level `~/.config/nyaya/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NYAYA_API__BASE_URL` -> `api.base_url`,
//! `NYAYA_CONSULTATION__LAWYER_PHONE` -> `consultation.lawyer_phone`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use nyaya_config::NyayaConfig;
//!
//! let config = NyayaConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.origin());
//! ```

mod api;
mod consultation;
mod display;
mod error;

pub use api::ApiConfig;
pub use consultation::ConsultationConfig;
pub use display::DisplayConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NyayaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub consultation: ConsultationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl NyayaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when the merged result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".nyaya/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("NYAYA_").split("__"))
    }

    /// Check cross-field constraints after extraction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nyaya").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NyayaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.consultation.cost, 500);
        assert_eq!(config.display.recent_years, 10);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: NyayaConfig = NyayaConfig::figment().extract()?;
            assert_eq!(config.api.timeout_secs, 30);
            assert_eq!(config.display.top_states, 3);
            Ok(())
        });
    }
}
