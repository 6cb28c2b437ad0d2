//! # salp-config
//!
//! Layered configuration loading for salp using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SALP_*` prefix, `__` as separator)
//! 2. Project-level `.salp/config.toml`
//! 3. User-level `~/.config/salp/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SALP_BACKEND__ENDPOINT` -> `backend.endpoint`,
//! `SALP_FORM__NUMERIC_POLICY` -> `form.numeric_policy`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use salp_config::SalpConfig;
//!
//! let config = SalpConfig::load_with_dotenv().expect("config");
//! println!("posting to {}", config.backend.endpoint);
//! ```

mod backend;
mod error;
mod form;
mod server;

pub use backend::{BackendConfig, DEFAULT_ENDPOINT};
pub use error::ConfigError;
pub use form::{FormConfig, NumericPolicy};
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SalpConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl SalpConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".salp/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SALP_").split("__"))
    }

    /// Reject values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP endpoint, a user
    /// agent that is not a legal header value, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.backend.has_http_endpoint() {
            return Err(ConfigError::InvalidValue {
                field: "backend.endpoint".into(),
                reason: format!("'{}' is not an http(s) URL", self.backend.endpoint),
            });
        }
        if !self.backend.has_header_safe_user_agent() {
            return Err(ConfigError::InvalidValue {
                field: "backend.user_agent".into(),
                reason: format!(
                    "{:?} is not a valid HTTP header value",
                    self.backend.user_agent
                ),
            });
        }
        if self.backend.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs".into(),
                reason: "must be greater than zero when set".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("salp").join("config.toml"))
    }
}
