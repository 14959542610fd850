//! Registry bootstrap behavior
//!
//! Covers the wiring contract: every capability yields a usable singleton,
//! collaborators are shared by reference, the configurator runs before any
//! provider, and construction failures abort start-up.

use futures::StreamExt;
use metahub_domain::error::Error;
use metahub_domain::events::{ChangeEventDispatcher, MetadataEvent};
use metahub_domain::ports::{
    CategoryProvider, ConnectorProvider, DataOperationsProvider, DataSetProvider,
    DataSourceProvider, DatasourceProvider, ExtensibleEntityProvider, ExtensibleTypeProvider,
    FeedManagerTemplateProvider, FeedProvider, MetadataAccess, TagProvider,
};
use metahub_providers::StoreMetadataAccess;
use metahub_providers::store::InMemoryMetadataStore;
use metahub_registry::{AppConfig, init_catalog, init_metadata, init_test_registry};
use std::sync::Arc;

#[tokio::test]
async fn test_every_capability_yields_a_usable_instance() {
    let registry = init_test_registry().await.unwrap();

    // Each capability answers a harmless call after bootstrap
    assert!(registry.categories().list_categories().await.unwrap().is_empty());
    assert!(registry.feeds().list_feeds().await.unwrap().is_empty());
    assert!(registry.datasources().list_datasources().await.unwrap().is_empty());
    assert!(registry.tags().find_tags().await.unwrap().is_empty());
    assert!(registry.templates().list_templates().await.unwrap().is_empty());
    assert!(registry.extensible_entities().list_entities().await.unwrap().is_empty());
    assert!(!registry.change_dispatcher().has_subscribers());

    // The configurator seeded the base types before any provider ran
    let types = registry.extensible_types().list_types().await.unwrap();
    let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
    assert!(names.contains(&"category"));
    assert!(names.contains(&"feed"));
}

#[tokio::test]
async fn test_capabilities_are_singletons() {
    let registry = init_test_registry().await.unwrap();

    assert!(Arc::ptr_eq(&registry.categories(), &registry.categories()));
    assert!(Arc::ptr_eq(&registry.feeds(), &registry.feeds()));
    assert!(Arc::ptr_eq(&registry.datasources(), &registry.datasources()));
    assert!(Arc::ptr_eq(
        &registry.change_dispatcher(),
        &registry.change_dispatcher()
    ));
    assert!(Arc::ptr_eq(
        &registry.metadata_access(),
        &registry.metadata_access()
    ));
}

#[tokio::test]
async fn test_property_util_holds_the_shared_access_instance() {
    let registry = init_test_registry().await.unwrap();

    // The exact instance the registry built, not a copy
    assert!(Arc::ptr_eq(
        &registry.properties().access(),
        &registry.metadata_access()
    ));

    // The store util likewise shares the versioning policy
    assert!(Arc::ptr_eq(
        &registry.store_util().versionable(),
        &registry.store_util().versionable()
    ));
}

#[tokio::test]
async fn test_configuration_completes_before_providers_exist() {
    let registry = init_test_registry().await.unwrap();
    assert!(registry.metadata_access().is_configured());

    // An access handle nobody configured stays gated
    let stray = StoreMetadataAccess::new_shared(InMemoryMetadataStore::new_shared());
    assert!(matches!(
        metahub_domain::ports::MetadataAccess::store(stray.as_ref()),
        Err(Error::NotConfigured { .. })
    ));
}

#[tokio::test]
async fn test_unknown_store_backend_aborts_startup() {
    let mut config = AppConfig::default();
    config.store.provider = "bogus".into();

    let err = init_metadata(&config).await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("bogus"));
}

#[tokio::test]
async fn test_null_backend_bootstraps() {
    let mut config = AppConfig::default();
    config.store.provider = "null".into();

    let registry = init_metadata(&config).await.unwrap();
    // The null store keeps nothing, but the wiring is intact
    assert!(registry.categories().list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_providers_share_one_repository() {
    let registry = init_test_registry().await.unwrap();

    let category = registry
        .categories()
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();
    let feed = registry
        .feeds()
        .ensure_feed(&category.id, "daily-load", None)
        .await
        .unwrap();
    registry.feeds().add_tag(&feed.id, "finance").await.unwrap();

    // The tag provider observes the feed provider's writes
    let tags = registry.tags().find_tags().await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "finance");
}

#[tokio::test]
async fn test_registry_events_flow_end_to_end() {
    let registry = init_test_registry().await.unwrap();
    let mut events = registry.change_dispatcher().subscribe().await.unwrap();

    let category = registry
        .categories()
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();

    match events.next().await {
        Some(MetadataEvent::CategoryCreated { id, system_name }) => {
            assert_eq!(id, category.id);
            assert_eq!(system_name, "accounts");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn test_operations_run_through_the_registry() {
    let registry = init_test_registry().await.unwrap();

    let category = registry
        .categories()
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();
    let feed = registry
        .feeds()
        .ensure_feed(&category.id, "daily-load", None)
        .await
        .unwrap();

    let ops = registry.data_operations();
    let op = ops.begin_operation(&feed.id, "starting").await.unwrap();
    ops.complete_operation(&op.id, "done").await.unwrap();

    let history = ops.list_operations(&feed.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].state.is_terminal());
}

#[tokio::test]
async fn test_catalog_registry_shares_the_repository() {
    let registry = init_test_registry().await.unwrap();
    let catalog = init_catalog(registry.metadata_access()).await.unwrap();

    // Same access instance on both registries
    assert!(Arc::ptr_eq(
        &catalog.metadata_access(),
        &registry.metadata_access()
    ));

    // Catalog singletons behave like the metadata ones
    assert!(Arc::ptr_eq(&catalog.connectors(), &catalog.connectors()));

    let connector = catalog
        .connectors()
        .ensure_connector("jdbc", "JDBC Connector")
        .await
        .unwrap();
    let source = catalog
        .data_sources()
        .ensure_data_source(&connector.id, "warehouse")
        .await
        .unwrap();
    let set = catalog
        .data_sets()
        .ensure_data_set(&source.id, "orders", "parquet")
        .await
        .unwrap();

    assert_eq!(
        catalog
            .data_sets()
            .list_by_data_source(&source.id)
            .await
            .unwrap()[0]
            .id,
        set.id
    );
}

#[tokio::test]
async fn test_catalog_registry_requires_configured_access() {
    let stray = StoreMetadataAccess::new_shared(InMemoryMetadataStore::new_shared());
    let err = init_catalog(stray).await.unwrap_err();
    assert!(matches!(err, Error::NotConfigured { .. }));
}
