//! Store Backend Resolver
//!
//! Resolves the metadata store backend by name using the linkme registry.
//! No direct knowledge of concrete backend implementations.
//!
//! ## Pattern
//!
//! ```text
//! AppConfig → StoreResolver → linkme registry → Arc<dyn MetadataStore>
//! ```

use crate::config::{AppConfig, StoreSettings};
use metahub_domain::error::{Error, Result};
use metahub_domain::ports::MetadataStore;
use metahub_domain::ports::registry::{
    StoreConfig, list_metadata_stores, resolve_metadata_store,
};
use std::sync::Arc;

/// Resolver component for store backends
///
/// Uses the linkme registry to resolve a backend by the name carried in
/// application configuration.
pub struct StoreResolver {
    config: Arc<AppConfig>,
}

impl StoreResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve the backend named in the application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn MetadataStore>> {
        let registry_config = store_settings_to_registry(&self.config.store);
        resolve_metadata_store(&registry_config)
            .map_err(|e| Error::configuration(format!("Store: {e}")))
    }

    /// List available store backends
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_metadata_stores()
    }
}

impl std::fmt::Debug for StoreResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreResolver").finish()
    }
}

/// Convert config-layer store settings to a registry StoreConfig
fn store_settings_to_registry(settings: &StoreSettings) -> StoreConfig {
    StoreConfig {
        provider: settings.provider.clone(),
        capacity: settings.capacity,
        extra: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_memory_backend() {
        // metahub-providers is linked, so its backends are registered
        let resolver = StoreResolver::new(Arc::new(AppConfig::default()));
        let store = resolver.resolve_from_config().unwrap();
        assert_eq!(store.store_name(), "memory");
    }

    #[test]
    fn test_unknown_backend_fails_with_available_list() {
        let mut config = AppConfig::default();
        config.store.provider = "bogus".into();

        let err = StoreResolver::new(Arc::new(config))
            .resolve_from_config()
            .unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!(err.to_string().contains("Available backends"));
    }

    #[test]
    fn test_list_available_includes_shipped_backends() {
        let resolver = StoreResolver::new(Arc::new(AppConfig::default()));
        let names: Vec<&str> = resolver.list_available().iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"memory"));
        assert!(names.contains(&"null"));
    }
}
