//! Configuration types

use crate::constants::{DEFAULT_EVENT_CAPACITY, DEFAULT_LOG_LEVEL, DEFAULT_STORE_PROVIDER};
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Store backend settings
    pub store: StoreSettings,
    /// Change-event settings
    pub events: EventSettings,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreSettings::default(),
            events: EventSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Store backend selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Backend name resolved through the store registry (e.g. "memory")
    pub provider: String,
    /// Soft cap on documents per space, for bounded backends
    pub capacity: Option<usize>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            capacity: None,
        }
    }
}

/// Change-event channel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    /// Broadcast channel capacity; oldest events drop when full
    pub capacity: usize,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter used when `METAHUB_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store.provider, "memory");
        assert_eq!(config.events.capacity, 1024);
        assert_eq!(config.logging.level, "info");
    }
}
