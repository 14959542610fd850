//! Property and store utilities
//!
//! `PropertyUtil` is the typed document codec every store-backed provider
//! goes through: it serializes entities to JSON documents and back, routed
//! through the shared `MetadataAccess` gatekeeper. `StoreUtil` carries the
//! versioning policy: which entity kinds get their revision counter bumped
//! on update.

use metahub_domain::entity::spaces;
use metahub_domain::error::Result;
use metahub_domain::ports::MetadataAccess;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;

/// Typed read/write helper over the metadata store
///
/// Holds the shared `MetadataAccess` instance the registry built; every
/// operation re-acquires the store handle so premature use fails fast.
#[derive(Debug)]
pub struct PropertyUtil {
    access: Arc<dyn MetadataAccess>,
}

impl PropertyUtil {
    /// Create a property util over the shared access gatekeeper
    pub fn new(access: Arc<dyn MetadataAccess>) -> Self {
        Self { access }
    }

    /// The exact access instance this util was constructed with
    pub fn access(&self) -> Arc<dyn MetadataAccess> {
        self.access.clone()
    }

    /// Serialize an entity and store it under (space, key)
    pub async fn write<T: Serialize + Sync>(
        &self,
        space: &str,
        key: &str,
        entity: &T,
    ) -> Result<()> {
        let doc = serde_json::to_value(entity)?;
        self.access.store()?.put(space, key, doc).await
    }

    /// Fetch and deserialize the entity stored under (space, key)
    pub async fn read<T: DeserializeOwned>(&self, space: &str, key: &str) -> Result<Option<T>> {
        match self.access.store()?.get(space, key).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    /// Fetch and deserialize every entity in a space
    pub async fn read_all<T: DeserializeOwned>(&self, space: &str) -> Result<Vec<T>> {
        self.access
            .store()?
            .list(space)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Into::into))
            .collect()
    }

    /// Remove the document under (space, key); returns whether it existed
    pub async fn remove(&self, space: &str, key: &str) -> Result<bool> {
        self.access.store()?.remove(space, key).await
    }
}

/// The set of entity kinds whose documents carry a revision counter
#[derive(Debug, Clone)]
pub struct VersionableTypes {
    kinds: HashSet<String>,
}

impl VersionableTypes {
    /// Create a policy covering the given spaces
    pub fn new(kinds: impl IntoIterator<Item = String>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Whether documents in a space are versioned
    pub fn is_versionable(&self, space: &str) -> bool {
        self.kinds.contains(space)
    }

    /// The versioned space names, unordered
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }
}

impl Default for VersionableTypes {
    /// Categories, feeds, and templates are versioned
    fn default() -> Self {
        Self::new(
            [spaces::CATEGORIES, spaces::FEEDS, spaces::TEMPLATES]
                .into_iter()
                .map(String::from),
        )
    }
}

/// Store-level helpers parameterized by the versioning policy
#[derive(Debug)]
pub struct StoreUtil {
    versionable: Arc<VersionableTypes>,
}

impl StoreUtil {
    /// Create a store util over the shared versioning policy
    pub fn new(versionable: Arc<VersionableTypes>) -> Self {
        Self { versionable }
    }

    /// The exact versioning policy this util was constructed with
    pub fn versionable(&self) -> Arc<VersionableTypes> {
        self.versionable.clone()
    }

    /// The revision an update in this space should carry
    ///
    /// Unversioned spaces keep their revision untouched.
    pub fn next_revision(&self, space: &str, current: u64) -> u64 {
        if self.versionable.is_versionable(space) {
            current + 1
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_versionable_kinds() {
        let types = VersionableTypes::default();
        assert!(types.is_versionable(spaces::FEEDS));
        assert!(types.is_versionable(spaces::CATEGORIES));
        assert!(types.is_versionable(spaces::TEMPLATES));
        assert!(!types.is_versionable(spaces::DATASOURCES));
    }

    #[test]
    fn test_next_revision_only_bumps_versionable() {
        let util = StoreUtil::new(Arc::new(VersionableTypes::default()));
        assert_eq!(util.next_revision(spaces::FEEDS, 3), 4);
        assert_eq!(util.next_revision(spaces::DATASOURCES, 3), 3);
    }
}
