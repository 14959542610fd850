//! In-memory metadata store
//!
//! The default backend: documents held in process memory, lost on drop.
//! Spaces map to ordered key/document maps so listings are deterministic.

use async_trait::async_trait;
use metahub_domain::error::{Error, Result};
use metahub_domain::ports::MetadataStore;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory `MetadataStore` backend
///
/// Writes to a space that has not been created fail; the repository
/// configurator is responsible for creating every space before providers
/// run.
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    spaces: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl InMemoryMetadataStore {
    /// Create an empty store with no spaces
    pub fn new() -> Self {
        Self::default()
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Total number of documents across all spaces
    pub async fn len(&self) -> usize {
        self.spaces.read().await.values().map(BTreeMap::len).sum()
    }

    /// Whether the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MetadataStore for InMemoryMetadataStore {
    async fn create_space(&self, space: &str) -> Result<()> {
        self.spaces
            .write()
            .await
            .entry(space.to_string())
            .or_default();
        Ok(())
    }

    async fn spaces(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.spaces.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn put(&self, space: &str, key: &str, doc: Value) -> Result<()> {
        let mut spaces = self.spaces.write().await;
        let docs = spaces
            .get_mut(space)
            .ok_or_else(|| Error::store(format!("unknown space '{space}'")))?;
        docs.insert(key.to_string(), doc);
        Ok(())
    }

    async fn get(&self, space: &str, key: &str) -> Result<Option<Value>> {
        let spaces = self.spaces.read().await;
        let docs = spaces
            .get(space)
            .ok_or_else(|| Error::store(format!("unknown space '{space}'")))?;
        Ok(docs.get(key).cloned())
    }

    async fn remove(&self, space: &str, key: &str) -> Result<bool> {
        let mut spaces = self.spaces.write().await;
        let docs = spaces
            .get_mut(space)
            .ok_or_else(|| Error::store(format!("unknown space '{space}'")))?;
        Ok(docs.remove(key).is_some())
    }

    async fn list(&self, space: &str) -> Result<Vec<Value>> {
        let spaces = self.spaces.read().await;
        let docs = spaces
            .get(space)
            .ok_or_else(|| Error::store(format!("unknown space '{space}'")))?;
        Ok(docs.values().cloned().collect())
    }

    async fn clear(&self) -> Result<()> {
        for docs in self.spaces.write().await.values_mut() {
            docs.clear();
        }
        Ok(())
    }

    fn store_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use metahub_domain::ports::registry::{METADATA_STORES, StoreConfig, StoreProviderEntry};

/// Factory function for creating in-memory store instances.
fn memory_store_factory(
    _config: &StoreConfig,
) -> std::result::Result<Arc<dyn MetadataStore>, String> {
    Ok(Arc::new(InMemoryMetadataStore::new()))
}

#[linkme::distributed_slice(METADATA_STORES)]
static MEMORY_STORE: StoreProviderEntry = StoreProviderEntry {
    name: "memory",
    description: "In-memory metadata store (fast, non-persistent)",
    factory: memory_store_factory,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_requires_space() {
        let store = InMemoryMetadataStore::new();
        let err = store.put("feeds", "a", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Store { .. }));

        store.create_space("feeds").await.unwrap();
        store.put("feeds", "a", json!({"name": "a"})).await.unwrap();
        assert_eq!(store.get("feeds", "a").await.unwrap(), Some(json!({"name": "a"})));
    }

    #[tokio::test]
    async fn test_list_is_key_ordered() {
        let store = InMemoryMetadataStore::new();
        store.create_space("s").await.unwrap();
        store.put("s", "b", json!(2)).await.unwrap();
        store.put("s", "a", json!(1)).await.unwrap();
        assert_eq!(store.list("s").await.unwrap(), vec![json!(1), json!(2)]);
    }

    #[tokio::test]
    async fn test_clear_keeps_spaces() {
        let store = InMemoryMetadataStore::new();
        store.create_space("s").await.unwrap();
        store.put("s", "a", json!(1)).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.is_empty().await);
        assert_eq!(store.spaces().await.unwrap(), vec!["s".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let store = InMemoryMetadataStore::new();
        store.create_space("s").await.unwrap();
        store.put("s", "a", json!(1)).await.unwrap();
        assert!(store.remove("s", "a").await.unwrap());
        assert!(!store.remove("s", "a").await.unwrap());
    }
}
