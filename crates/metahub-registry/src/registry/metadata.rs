//! Metadata Provider Registry - composition root
//!
//! Builds every metadata-domain provider singleton in topological order
//! with constructor injection, running the repository configurator to
//! completion before any provider exists.
//!
//! ## Construction order
//!
//! ```text
//! AppConfig → StoreResolver → store backend
//!                                  │
//!                                  ▼
//!                      StoreMetadataAccess (gate closed)
//!                                  │
//!                                  ▼
//!                   RepositoryConfigurator::configure()
//!                                  │
//!                                  ▼
//!       dispatcher → utilities → providers → MetadataRegistry
//! ```
//!
//! Each accessor returns a clone of the same `Arc`, so two requests for a
//! capability observe the same instance.

use crate::config::AppConfig;
use crate::configurator::RepositoryConfigurator;
use crate::resolver::StoreResolver;
use metahub_domain::error::Result;
use metahub_domain::events::ChangeEventDispatcher;
use metahub_domain::ports::{
    CategoryProvider, DataOperationsProvider, DatasourceProvider, ExtensibleEntityProvider,
    ExtensibleTypeProvider, FeedManagerCategoryProvider, FeedManagerFeedProvider,
    FeedManagerTemplateProvider, FeedProvider, MetadataAccess, MetadataStore, TagProvider,
};
use metahub_providers::events::BroadcastChangeEventDispatcher;
use metahub_providers::support::{PropertyUtil, StoreUtil, VersionableTypes};
use metahub_providers::{
    InMemoryDataOperationsProvider, StoreCategoryProvider, StoreDatasourceProvider,
    StoreExtensibleEntityProvider, StoreExtensibleTypeProvider, StoreFeedManagerCategoryProvider,
    StoreFeedManagerFeedProvider, StoreFeedProvider, StoreMetadataAccess, StoreTagProvider,
    StoreTemplateProvider,
};
use std::sync::Arc;
use tracing::info;

/// Metadata provider registry
///
/// Holds exactly one instance per metadata capability for the lifetime of
/// the registry. Construction happens only through [`init_metadata`].
pub struct MetadataRegistry {
    // ========================================================================
    // Repository access
    // ========================================================================
    access: Arc<dyn MetadataAccess>,

    // ========================================================================
    // Providers
    // ========================================================================
    categories: Arc<dyn CategoryProvider>,
    feeds: Arc<dyn FeedProvider>,
    datasources: Arc<dyn DatasourceProvider>,
    extensible_types: Arc<dyn ExtensibleTypeProvider>,
    extensible_entities: Arc<dyn ExtensibleEntityProvider>,
    tags: Arc<dyn TagProvider>,
    feed_manager_categories: Arc<dyn FeedManagerCategoryProvider>,
    feed_manager_feeds: Arc<dyn FeedManagerFeedProvider>,
    templates: Arc<dyn FeedManagerTemplateProvider>,
    data_operations: Arc<dyn DataOperationsProvider>,
    change_dispatcher: Arc<dyn ChangeEventDispatcher>,

    // ========================================================================
    // Utilities (wired with shared collaborators)
    // ========================================================================
    property_util: Arc<PropertyUtil>,
    store_util: Arc<StoreUtil>,
}

impl MetadataRegistry {
    /// The repository access gatekeeper
    pub fn metadata_access(&self) -> Arc<dyn MetadataAccess> {
        self.access.clone()
    }

    /// The category provider
    pub fn categories(&self) -> Arc<dyn CategoryProvider> {
        self.categories.clone()
    }

    /// The feed provider
    pub fn feeds(&self) -> Arc<dyn FeedProvider> {
        self.feeds.clone()
    }

    /// The datasource provider
    pub fn datasources(&self) -> Arc<dyn DatasourceProvider> {
        self.datasources.clone()
    }

    /// The extensible type provider
    pub fn extensible_types(&self) -> Arc<dyn ExtensibleTypeProvider> {
        self.extensible_types.clone()
    }

    /// The extensible entity provider
    pub fn extensible_entities(&self) -> Arc<dyn ExtensibleEntityProvider> {
        self.extensible_entities.clone()
    }

    /// The tag provider
    pub fn tags(&self) -> Arc<dyn TagProvider> {
        self.tags.clone()
    }

    /// The feed-manager category provider
    pub fn feed_manager_categories(&self) -> Arc<dyn FeedManagerCategoryProvider> {
        self.feed_manager_categories.clone()
    }

    /// The feed-manager feed provider
    pub fn feed_manager_feeds(&self) -> Arc<dyn FeedManagerFeedProvider> {
        self.feed_manager_feeds.clone()
    }

    /// The feed-manager template provider
    pub fn templates(&self) -> Arc<dyn FeedManagerTemplateProvider> {
        self.templates.clone()
    }

    /// The data operations provider
    pub fn data_operations(&self) -> Arc<dyn DataOperationsProvider> {
        self.data_operations.clone()
    }

    /// The change-event dispatcher
    pub fn change_dispatcher(&self) -> Arc<dyn ChangeEventDispatcher> {
        self.change_dispatcher.clone()
    }

    /// The property util, wired with the shared access instance
    pub fn properties(&self) -> Arc<PropertyUtil> {
        self.property_util.clone()
    }

    /// The store util, wired with the shared versioning policy
    pub fn store_util(&self) -> Arc<StoreUtil> {
        self.store_util.clone()
    }
}

impl std::fmt::Debug for MetadataRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataRegistry")
            .field("access", &self.access)
            .field("change_dispatcher", &self.change_dispatcher)
            .finish_non_exhaustive()
    }
}

/// Initialize the metadata provider registry
///
/// Resolves the store backend, runs the repository configurator to
/// completion, then constructs every provider singleton. Any failure
/// propagates as `Err` and aborts start-up; nothing is retried.
pub async fn init_metadata(config: &AppConfig) -> Result<MetadataRegistry> {
    info!("Initializing metadata provider registry");

    let config = Arc::new(config.clone());

    // ========================================================================
    // Resolve the store backend and open the access gate
    // ========================================================================

    let resolver = StoreResolver::new(config.clone());
    let store = resolver.resolve_from_config()?;
    info!(store = store.store_name(), "Resolved store backend");

    let access: Arc<dyn MetadataAccess> = StoreMetadataAccess::new_shared(store.clone());

    let configurator = RepositoryConfigurator::new(store, access.clone());
    configurator.configure().await?;

    // ========================================================================
    // Shared collaborators
    // ========================================================================

    let change_dispatcher: Arc<dyn ChangeEventDispatcher> = Arc::new(
        BroadcastChangeEventDispatcher::with_capacity(config.events.capacity),
    );
    let versionable = Arc::new(VersionableTypes::default());
    let property_util = Arc::new(PropertyUtil::new(access.clone()));
    let store_util = Arc::new(StoreUtil::new(versionable));

    // ========================================================================
    // Providers
    // ========================================================================

    let categories: Arc<dyn CategoryProvider> = Arc::new(StoreCategoryProvider::new(
        property_util.clone(),
        store_util.clone(),
        change_dispatcher.clone(),
    ));
    let feeds: Arc<dyn FeedProvider> = Arc::new(StoreFeedProvider::new(
        property_util.clone(),
        store_util.clone(),
        change_dispatcher.clone(),
    ));
    let datasources: Arc<dyn DatasourceProvider> =
        Arc::new(StoreDatasourceProvider::new(property_util.clone()));
    let extensible_types: Arc<dyn ExtensibleTypeProvider> =
        Arc::new(StoreExtensibleTypeProvider::new(property_util.clone()));
    let extensible_entities: Arc<dyn ExtensibleEntityProvider> =
        Arc::new(StoreExtensibleEntityProvider::new(property_util.clone()));
    let tags: Arc<dyn TagProvider> = Arc::new(StoreTagProvider::new(property_util.clone()));
    let feed_manager_categories: Arc<dyn FeedManagerCategoryProvider> =
        Arc::new(StoreFeedManagerCategoryProvider::new(property_util.clone()));
    let feed_manager_feeds: Arc<dyn FeedManagerFeedProvider> =
        Arc::new(StoreFeedManagerFeedProvider::new(property_util.clone()));
    let templates: Arc<dyn FeedManagerTemplateProvider> = Arc::new(StoreTemplateProvider::new(
        property_util.clone(),
        store_util.clone(),
        change_dispatcher.clone(),
    ));
    let data_operations: Arc<dyn DataOperationsProvider> = Arc::new(
        InMemoryDataOperationsProvider::new(change_dispatcher.clone()),
    );

    info!("Created metadata providers");

    Ok(MetadataRegistry {
        access,
        categories,
        feeds,
        datasources,
        extensible_types,
        extensible_entities,
        tags,
        feed_manager_categories,
        feed_manager_feeds,
        templates,
        data_operations,
        change_dispatcher,
        property_util,
        store_util,
    })
}

/// Initialize a registry with default configuration, for tests
pub async fn init_test_registry() -> Result<MetadataRegistry> {
    init_metadata(&AppConfig::default()).await
}
