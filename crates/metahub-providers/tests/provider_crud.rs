//! Provider CRUD behavior over a configured in-memory repository
//!
//! These tests build the providers by hand over a raw store with every
//! space created, the same shape the repository configurator produces.

use futures::StreamExt;
use metahub_domain::entity::{FieldDescriptor, UserField, spaces};
use metahub_domain::error::Error;
use metahub_domain::events::{ChangeEventDispatcher, MetadataEvent};
use metahub_domain::ports::{
    CategoryProvider, ConnectorProvider, DataSetProvider, DataSourceProvider, DatasourceProvider,
    ExtensibleEntityProvider, ExtensibleTypeProvider, FeedManagerCategoryProvider,
    FeedManagerFeedProvider, FeedManagerTemplateProvider, FeedProvider, MetadataAccess,
    MetadataStore, TagProvider,
};
use metahub_providers::events::BroadcastChangeEventDispatcher;
use metahub_providers::store::InMemoryMetadataStore;
use metahub_providers::support::{PropertyUtil, StoreUtil, VersionableTypes};
use metahub_providers::{
    StoreCategoryProvider, StoreConnectorProvider, StoreDataSetProvider, StoreDataSourceProvider,
    StoreDatasourceProvider, StoreExtensibleEntityProvider, StoreExtensibleTypeProvider,
    StoreFeedManagerCategoryProvider, StoreFeedManagerFeedProvider, StoreFeedProvider,
    StoreMetadataAccess, StoreTagProvider, StoreTemplateProvider,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

struct Fixture {
    properties: Arc<PropertyUtil>,
    store_util: Arc<StoreUtil>,
    dispatcher: Arc<BroadcastChangeEventDispatcher>,
}

impl Fixture {
    async fn new() -> Self {
        let store = InMemoryMetadataStore::new_shared();
        for space in spaces::ALL {
            store.create_space(space).await.unwrap();
        }

        let access = StoreMetadataAccess::new_shared(store);
        access.mark_configured();

        Self {
            properties: Arc::new(PropertyUtil::new(access)),
            store_util: Arc::new(StoreUtil::new(Arc::new(VersionableTypes::default()))),
            dispatcher: BroadcastChangeEventDispatcher::new_shared(),
        }
    }

    fn categories(&self) -> StoreCategoryProvider {
        StoreCategoryProvider::new(
            self.properties.clone(),
            self.store_util.clone(),
            self.dispatcher.clone(),
        )
    }

    fn feeds(&self) -> StoreFeedProvider {
        StoreFeedProvider::new(
            self.properties.clone(),
            self.store_util.clone(),
            self.dispatcher.clone(),
        )
    }

    fn templates(&self) -> StoreTemplateProvider {
        StoreTemplateProvider::new(
            self.properties.clone(),
            self.store_util.clone(),
            self.dispatcher.clone(),
        )
    }
}

#[tokio::test]
async fn test_ensure_category_is_create_if_absent() {
    let fx = Fixture::new().await;
    let categories = fx.categories();

    let first = categories
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();
    let second = categories
        .ensure_category("accounts", "Accounts again", None)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.display_name, "Accounts");
    assert_eq!(categories.list_categories().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_category_bumps_revision() {
    let fx = Fixture::new().await;
    let categories = fx.categories();

    let mut category = categories
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();
    assert_eq!(category.revision, 0);

    category.display_name = "Customer accounts".into();
    let updated = categories.update_category(category).await.unwrap();
    assert_eq!(updated.revision, 1);
    assert_eq!(updated.display_name, "Customer accounts");
}

#[tokio::test]
async fn test_delete_category_with_feeds_fails() {
    let fx = Fixture::new().await;
    let categories = fx.categories();
    let feeds = fx.feeds();

    let category = categories
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();
    feeds
        .ensure_feed(&category.id, "daily-load", None)
        .await
        .unwrap();

    let err = categories.delete_category(&category.id).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_feed_requires_existing_category() {
    let fx = Fixture::new().await;
    let feeds = fx.feeds();

    let missing = metahub_domain::entity::CategoryId::new();
    let err = feeds.ensure_feed(&missing, "daily-load", None).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_feed_state_changes_emit_events() {
    let fx = Fixture::new().await;
    let categories = fx.categories();
    let feeds = fx.feeds();

    let category = categories
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();

    let mut events = fx.dispatcher.subscribe().await.unwrap();

    let feed = feeds
        .ensure_feed(&category.id, "daily-load", None)
        .await
        .unwrap();
    feeds.disable_feed(&feed.id).await.unwrap();

    assert!(matches!(
        events.next().await,
        Some(MetadataEvent::FeedCreated { .. })
    ));
    assert!(matches!(
        events.next().await,
        Some(MetadataEvent::FeedStateChanged { .. })
    ));
}

#[tokio::test]
async fn test_feed_precondition_round_trip() {
    let fx = Fixture::new().await;
    let categories = fx.categories();
    let feeds = fx.feeds();

    let category = categories
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();
    let feed = feeds
        .ensure_feed(&category.id, "daily-load", None)
        .await
        .unwrap();
    assert_eq!(feed.precondition, None);

    let feed = feeds
        .set_precondition(&feed.id, Some("upstream-complete".into()))
        .await
        .unwrap();
    assert_eq!(feed.precondition.as_deref(), Some("upstream-complete"));

    let feed = feeds.set_precondition(&feed.id, None).await.unwrap();
    assert_eq!(feed.precondition, None);
}

#[tokio::test]
async fn test_tags_aggregate_across_feeds() {
    let fx = Fixture::new().await;
    let categories = fx.categories();
    let feeds = fx.feeds();
    let tags = StoreTagProvider::new(fx.properties.clone());

    let category = categories
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();
    let a = feeds.ensure_feed(&category.id, "a", None).await.unwrap();
    let b = feeds.ensure_feed(&category.id, "b", None).await.unwrap();

    feeds.add_tag(&a.id, "finance").await.unwrap();
    feeds.add_tag(&a.id, "daily").await.unwrap();
    feeds.add_tag(&b.id, "finance").await.unwrap();

    let all: Vec<String> = tags
        .find_tags()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(all, vec!["daily".to_string(), "finance".to_string()]);

    let matching = tags.matching_tags("fin").await.unwrap();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].name, "finance");
}

#[tokio::test]
async fn test_extensible_entity_validates_required_fields() {
    let fx = Fixture::new().await;
    let types = StoreExtensibleTypeProvider::new(fx.properties.clone());
    let entities = StoreExtensibleEntityProvider::new(fx.properties.clone());

    types
        .register_type(
            "sla",
            vec![
                FieldDescriptor::new("name", true),
                FieldDescriptor::new("threshold", false),
            ],
        )
        .await
        .unwrap();

    let err = entities
        .create_entity("sla", HashMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let mut props = HashMap::new();
    props.insert("name".to_string(), json!("gold"));
    let entity = entities.create_entity("sla", props).await.unwrap();

    let ty = types.find_by_name("sla").await.unwrap().unwrap();
    assert_eq!(entities.list_by_type(&ty.id).await.unwrap().len(), 1);
    assert_eq!(entity.type_id, ty.id);

    // Type deletion is blocked while entities reference it
    let err = types.delete_type(&ty.id).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_duplicate_type_registration_fails() {
    let fx = Fixture::new().await;
    let types = StoreExtensibleTypeProvider::new(fx.properties.clone());

    types.register_type("sla", vec![]).await.unwrap();
    let err = types.register_type("sla", vec![]).await.unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));
}

#[tokio::test]
async fn test_datasource_round_trip() {
    let fx = Fixture::new().await;
    let datasources = StoreDatasourceProvider::new(fx.properties.clone());

    let ds = datasources
        .ensure_datasource("warehouse", Some("main warehouse".into()))
        .await
        .unwrap();
    assert_eq!(
        datasources.find_by_name("warehouse").await.unwrap().unwrap().id,
        ds.id
    );
    assert!(datasources.delete_datasource(&ds.id).await.unwrap());
    assert!(!datasources.delete_datasource(&ds.id).await.unwrap());
}

#[tokio::test]
async fn test_feed_manager_details() {
    let fx = Fixture::new().await;
    let categories = fx.categories();
    let feeds = fx.feeds();
    let templates = fx.templates();
    let fm_categories = StoreFeedManagerCategoryProvider::new(fx.properties.clone());
    let fm_feeds = StoreFeedManagerFeedProvider::new(fx.properties.clone());

    let category = categories
        .ensure_category("accounts", "Accounts", None)
        .await
        .unwrap();
    let feed = feeds
        .ensure_feed(&category.id, "daily-load", None)
        .await
        .unwrap();
    let template = templates
        .ensure_template("standard-ingest", None)
        .await
        .unwrap();

    let detail = fm_categories
        .set_user_fields(
            &category.id,
            vec![UserField {
                name: "owner".into(),
                display_name: "Owner".into(),
                required: true,
                order: 0,
            }],
        )
        .await
        .unwrap();
    assert_eq!(detail.user_fields.len(), 1);

    let detail = fm_feeds.set_template(&feed.id, &template.id).await.unwrap();
    assert_eq!(detail.template_id, Some(template.id));

    // Template deletion is blocked while a feed references it
    let err = templates.delete_template(&template.id).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_catalog_hierarchy() {
    let fx = Fixture::new().await;
    let connectors = StoreConnectorProvider::new(fx.properties.clone());
    let data_sources = StoreDataSourceProvider::new(fx.properties.clone());
    let data_sets = StoreDataSetProvider::new(fx.properties.clone());

    let connector = connectors
        .ensure_connector("jdbc", "JDBC Connector")
        .await
        .unwrap();
    let source = data_sources
        .ensure_data_source(&connector.id, "warehouse")
        .await
        .unwrap();
    let set = data_sets
        .ensure_data_set(&source.id, "orders", "parquet")
        .await
        .unwrap();

    assert_eq!(
        data_sources.list_by_connector(&connector.id).await.unwrap()[0].id,
        source.id
    );
    assert_eq!(
        data_sets.list_by_data_source(&source.id).await.unwrap()[0].id,
        set.id
    );

    // Deactivated connectors reject new data sources
    connectors.deactivate(&connector.id).await.unwrap();
    let err = data_sources
        .ensure_data_source(&connector.id, "late")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    assert!(connectors.list_connectors(true).await.unwrap().is_empty());
    assert_eq!(connectors.list_connectors(false).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unconfigured_access_fails_fast() {
    let store = InMemoryMetadataStore::new_shared();
    let access = StoreMetadataAccess::new_shared(store);
    let properties = Arc::new(PropertyUtil::new(access));
    let datasources = StoreDatasourceProvider::new(properties);

    let err = datasources.list_datasources().await.unwrap_err();
    assert!(matches!(err, Error::NotConfigured { .. }));
}
