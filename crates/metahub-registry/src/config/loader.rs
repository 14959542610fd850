//! Configuration loader
//!
//! Handles loading configuration from defaults, a TOML file, and
//! environment variables, merged in that order with figment.

use crate::config::AppConfig;
use crate::constants::CONFIG_ENV_PREFIX;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use metahub_domain::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if set)
    /// 3. Environment variables with prefix (e.g. `METAHUB_STORE_PROVIDER`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            debug!(path = %config_path.display(), "Merging configuration file");
            figment = figment.merge(Toml::file(config_path));
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        figment
            .extract()
            .map_err(|e| Error::configuration(format!("failed to load configuration: {e}")))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_without_sources() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        // Toml::file is tolerant of a missing file; defaults remain
        let config = ConfigLoader::new()
            .with_config_path("/nonexistent/metahub.toml")
            .load()
            .unwrap();
        assert_eq!(config.store.provider, "memory");
    }
}
