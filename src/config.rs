//! Desk configuration, read from TOML
//!
//! ```toml
//! quote_currency = "ETB"
//! translations = "/etc/forex/am.json"
//!
//! [rate_band]
//! low = 135.0
//! high = 137.0
//! ```

use crate::error::{ForexError, Result};
use crate::i18n::{Catalog, IdentityTranslator, Translator};
use crate::rate::RateBand;
use crate::types::{Rate, DEFAULT_QUOTE_CURRENCY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Bounds of the generated exchange rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBandConfig {
    pub low: Rate,
    pub high: Rate,
}

impl Default for RateBandConfig {
    fn default() -> Self {
        let band = RateBand::default();
        Self {
            low: band.low(),
            high: band.high(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForexConfig {
    #[serde(default)]
    pub rate_band: RateBandConfig,
    #[serde(default = "default_quote_currency")]
    pub quote_currency: String,
    /// JSON label catalog
    #[serde(default)]
    pub translations: Option<PathBuf>,
}

fn default_quote_currency() -> String {
    DEFAULT_QUOTE_CURRENCY.to_string()
}

impl Default for ForexConfig {
    fn default() -> Self {
        Self {
            rate_band: RateBandConfig::default(),
            quote_currency: default_quote_currency(),
            translations: None,
        }
    }
}

impl ForexConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ForexError::ConfigError(e.to_string()))?;
        if config.quote_currency.trim().is_empty() {
            return Err(ForexError::ConfigError(
                "quote_currency must not be empty".to_string(),
            ));
        }
        config.rate_band()?;
        Ok(config)
    }

    /// Default config location, `~/.forex-management/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".forex-management").join("config.toml"))
    }

    /// Load from `path`, or from the default location when no path is
    /// given. A given path must exist. A missing default file yields the
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let contents = fs::read_to_string(path).map_err(|e| {
                ForexError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
            })?;
            log::info!("Loaded config from {}", path.display());
            return Self::from_toml_str(&contents);
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => {
                let contents = fs::read_to_string(&default_path)?;
                log::info!("Loaded config from {}", default_path.display());
                Self::from_toml_str(&contents)
            }
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validated rate band
    pub fn rate_band(&self) -> Result<RateBand> {
        RateBand::new(self.rate_band.low, self.rate_band.high)
    }

    /// Label translator: the configured catalog, or identity
    pub fn translator(&self) -> Result<Box<dyn Translator>> {
        match &self.translations {
            Some(path) => Ok(Box::new(Catalog::load(path)?)),
            None => Ok(Box::new(IdentityTranslator)),
        }
    }
}
