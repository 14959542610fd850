//! Null metadata store for testing
//!
//! A store backend that doesn't keep anything. Useful for wiring tests
//! where persistence is irrelevant.

use async_trait::async_trait;
use metahub_domain::error::Result;
use metahub_domain::ports::MetadataStore;
use serde_json::Value;
use std::sync::Arc;

/// Null store backend that accepts every write and returns nothing
#[derive(Debug, Clone, Default)]
pub struct NullMetadataStore;

impl NullMetadataStore {
    /// Create a new null store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetadataStore for NullMetadataStore {
    async fn create_space(&self, _space: &str) -> Result<()> {
        Ok(())
    }

    async fn spaces(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn put(&self, _space: &str, _key: &str, _doc: Value) -> Result<()> {
        // Accept the write but don't store anything
        Ok(())
    }

    async fn get(&self, _space: &str, _key: &str) -> Result<Option<Value>> {
        Ok(None)
    }

    async fn remove(&self, _space: &str, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn list(&self, _space: &str) -> Result<Vec<Value>> {
        Ok(Vec::new())
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn store_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use metahub_domain::ports::registry::{METADATA_STORES, StoreConfig, StoreProviderEntry};

/// Factory function for creating null store instances.
fn null_store_factory(
    _config: &StoreConfig,
) -> std::result::Result<Arc<dyn MetadataStore>, String> {
    Ok(Arc::new(NullMetadataStore::new()))
}

#[linkme::distributed_slice(METADATA_STORES)]
static NULL_STORE: StoreProviderEntry = StoreProviderEntry {
    name: "null",
    description: "Null metadata store (stores nothing, for wiring tests)",
    factory: null_store_factory,
};
