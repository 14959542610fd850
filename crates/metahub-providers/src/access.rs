//! Repository access gatekeeper
//!
//! `StoreMetadataAccess` is the single `MetadataAccess` instance a registry
//! builds. The store handle is withheld until the repository configurator
//! has completed, so a provider invoked too early fails fast instead of
//! observing a half-configured repository.

use metahub_domain::error::{Error, Result};
use metahub_domain::ports::{MetadataAccess, MetadataStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// `MetadataAccess` over a resolved store backend
#[derive(Debug)]
pub struct StoreMetadataAccess {
    store: Arc<dyn MetadataStore>,
    configured: AtomicBool,
}

impl StoreMetadataAccess {
    /// Wrap a store backend; the handle starts unconfigured
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self {
            store,
            configured: AtomicBool::new(false),
        }
    }

    /// Wrap as Arc for sharing
    pub fn new_shared(store: Arc<dyn MetadataStore>) -> Arc<Self> {
        Arc::new(Self::new(store))
    }
}

impl MetadataAccess for StoreMetadataAccess {
    fn store(&self) -> Result<Arc<dyn MetadataStore>> {
        if !self.is_configured() {
            return Err(Error::not_configured(
                "metadata store accessed before repository configuration completed",
            ));
        }
        Ok(self.store.clone())
    }

    fn is_configured(&self) -> bool {
        self.configured.load(Ordering::Acquire)
    }

    fn mark_configured(&self) {
        self.configured.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryMetadataStore;

    #[test]
    fn test_store_withheld_until_configured() {
        let access = StoreMetadataAccess::new(InMemoryMetadataStore::new_shared());
        assert!(!access.is_configured());
        assert!(matches!(
            access.store(),
            Err(Error::NotConfigured { .. })
        ));

        access.mark_configured();
        assert!(access.is_configured());
        assert!(access.store().is_ok());
    }
}
