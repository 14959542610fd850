//! Repository-structure configurator
//!
//! One-time structural setup of the underlying repository: creates every
//! document space the providers use and seeds the built-in extensible
//! types, then flips the access handle's configured flag. Runs to
//! completion before any provider is handed out.

use metahub_domain::entity::{ExtensibleType, FieldDescriptor, spaces};
use metahub_domain::error::Result;
use metahub_domain::ports::{MetadataAccess, MetadataStore};
use std::sync::Arc;
use tracing::{debug, info};

/// One-time repository configurator
///
/// Holds the raw store handle because it runs before the access gate
/// opens; everything after it goes through `MetadataAccess`.
#[derive(Debug)]
pub struct RepositoryConfigurator {
    store: Arc<dyn MetadataStore>,
    access: Arc<dyn MetadataAccess>,
}

impl RepositoryConfigurator {
    /// Create a configurator over the resolved store and its access gate
    pub fn new(store: Arc<dyn MetadataStore>, access: Arc<dyn MetadataAccess>) -> Self {
        Self { store, access }
    }

    /// Perform one-time structural configuration
    ///
    /// Idempotent: a second call within the same lifecycle is a no-op.
    /// Any failure propagates and aborts start-up.
    pub async fn configure(&self) -> Result<()> {
        if self.access.is_configured() {
            debug!("Repository already configured");
            return Ok(());
        }

        for space in spaces::ALL {
            self.store.create_space(space).await?;
        }
        debug!(count = spaces::ALL.len(), "Created document spaces");

        self.seed_base_types().await?;

        self.access.mark_configured();
        info!(
            store = self.store.store_name(),
            "Repository structure configured"
        );
        Ok(())
    }

    /// Seed the built-in extensible types, skipping names already present
    /// (a restart against a persistent backend keeps the originals)
    async fn seed_base_types(&self) -> Result<()> {
        let existing = self.store.list(spaces::TYPES).await?;
        let taken: Vec<String> = existing
            .iter()
            .filter_map(|doc| doc.get("name").and_then(|n| n.as_str()).map(String::from))
            .collect();

        for ty in base_types() {
            if taken.iter().any(|name| name == &ty.name) {
                continue;
            }
            let doc = serde_json::to_value(&ty)?;
            self.store.put(spaces::TYPES, &ty.id.to_string(), doc).await?;
            debug!(name = %ty.name, "Seeded base type");
        }
        Ok(())
    }
}

/// The base extensible types every repository starts with
fn base_types() -> Vec<ExtensibleType> {
    vec![
        ExtensibleType::new(
            "category",
            vec![
                FieldDescriptor::new("systemName", true),
                FieldDescriptor::new("title", false),
            ],
        ),
        ExtensibleType::new(
            "feed",
            vec![
                FieldDescriptor::new("systemName", true),
                FieldDescriptor::new("title", false),
                FieldDescriptor::new("description", false),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use metahub_providers::StoreMetadataAccess;
    use metahub_providers::store::InMemoryMetadataStore;

    #[tokio::test]
    async fn test_configure_creates_spaces_and_opens_access() {
        let store = InMemoryMetadataStore::new_shared();
        let access: Arc<dyn MetadataAccess> = StoreMetadataAccess::new_shared(store.clone());

        let configurator = RepositoryConfigurator::new(store.clone(), access.clone());
        configurator.configure().await.unwrap();

        assert!(access.is_configured());
        let spaces_created = store.spaces().await.unwrap();
        for space in spaces::ALL {
            assert!(spaces_created.iter().any(|s| s == space), "missing {space}");
        }
    }

    #[tokio::test]
    async fn test_configure_is_idempotent() {
        let store = InMemoryMetadataStore::new_shared();
        let access: Arc<dyn MetadataAccess> = StoreMetadataAccess::new_shared(store.clone());

        let configurator = RepositoryConfigurator::new(store.clone(), access);
        configurator.configure().await.unwrap();
        let seeded = store.list(spaces::TYPES).await.unwrap().len();

        configurator.configure().await.unwrap();
        assert_eq!(store.list(spaces::TYPES).await.unwrap().len(), seeded);
    }

    #[tokio::test]
    async fn test_base_types_are_seeded() {
        let store = InMemoryMetadataStore::new_shared();
        let access: Arc<dyn MetadataAccess> = StoreMetadataAccess::new_shared(store.clone());

        RepositoryConfigurator::new(store.clone(), access)
            .configure()
            .await
            .unwrap();

        let types = store.list(spaces::TYPES).await.unwrap();
        let names: Vec<&str> = types
            .iter()
            .filter_map(|doc| doc.get("name").and_then(|n| n.as_str()))
            .collect();
        assert!(names.contains(&"category"));
        assert!(names.contains(&"feed"));
    }
}
