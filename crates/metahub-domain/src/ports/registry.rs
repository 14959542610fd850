//! Store Backend Registry
//!
//! Auto-registration system for metadata store backends. Backends register
//! themselves via `linkme::distributed_slice` entries and are discovered
//! at runtime by name.
//!
//! ## Usage
//!
//! ### Registering a backend (in metahub-providers)
//!
//! ```ignore
//! use metahub_domain::ports::registry::{StoreProviderEntry, METADATA_STORES};
//!
//! #[linkme::distributed_slice(METADATA_STORES)]
//! static MEMORY_STORE: StoreProviderEntry = StoreProviderEntry {
//!     name: "memory",
//!     description: "In-memory metadata store (fast, non-persistent)",
//!     factory: memory_store_factory,
//! };
//! ```
//!
//! ### Resolving a backend (in metahub-registry)
//!
//! ```ignore
//! use metahub_domain::ports::registry::{StoreConfig, resolve_metadata_store};
//!
//! let store = resolve_metadata_store(&StoreConfig::new("memory"))?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::access::MetadataStore;

/// Configuration for store backend creation
///
/// Carries everything a backend might need. Backends use what they need
/// and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Backend name (e.g. "memory", "null")
    pub provider: String,
    /// Soft cap on documents per space, for bounded backends
    pub capacity: Option<usize>,
    /// Additional backend-specific configuration
    pub extra: HashMap<String, String>,
}

impl StoreConfig {
    /// Create a new config with the given backend name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the per-space capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for store backends
///
/// Each backend registers one of these with `linkme::distributed_slice`.
pub struct StoreProviderEntry {
    /// Unique backend name (e.g. "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a backend instance
    pub factory: fn(&StoreConfig) -> std::result::Result<Arc<dyn MetadataStore>, String>,
}

// Backends submit entries at compile time; the slice is complete at link time.
#[linkme::distributed_slice]
pub static METADATA_STORES: [StoreProviderEntry] = [..];

/// Resolve a store backend by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn MetadataStore>)` - created backend instance
/// * `Err(String)` - backend not found or creation failed
pub fn resolve_metadata_store(
    config: &StoreConfig,
) -> std::result::Result<Arc<dyn MetadataStore>, String> {
    for entry in METADATA_STORES {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = METADATA_STORES.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown metadata store '{}'. Available backends: {:?}",
        config.provider, available
    ))
}

/// List all registered store backends as (name, description) pairs
pub fn list_metadata_stores() -> Vec<(&'static str, &'static str)> {
    METADATA_STORES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("memory")
            .with_capacity(10_000)
            .with_extra("region", "local");

        assert_eq!(config.provider, "memory");
        assert_eq!(config.capacity, Some(10_000));
        assert_eq!(config.extra.get("region").map(String::as_str), Some("local"));
    }

    #[test]
    fn test_unknown_backend_lists_available() {
        // Backends are not linked into this crate's unit tests, so any
        // name misses and the error carries the (possibly empty) list.
        let err = resolve_metadata_store(&StoreConfig::new("no-such-backend")).unwrap_err();
        assert!(err.contains("no-such-backend"));
        assert!(err.contains("Available backends"));
    }
}
