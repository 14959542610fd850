//! Metadata entities and typed identifiers
//!
//! Every entity kind managed through a provider port has a value type here.
//! Entities are plain serde-serializable data; behavior lives in the
//! providers.

pub mod catalog;
pub mod category;
pub mod datasource;
pub mod extension;
pub mod feed;
pub mod id;
pub mod op;
pub mod tag;
pub mod template;

pub use catalog::{Connector, DataSet, DataSource};
pub use category::{Category, CategoryDetail, UserField};
pub use datasource::Datasource;
pub use extension::{ExtensibleEntity, ExtensibleType, FieldDescriptor};
pub use feed::{Feed, FeedDetail, FeedState};
pub use id::{
    CategoryId, ConnectorId, DataSetId, DataSourceId, DatasourceId, EntityId, FeedId, OperationId,
    TemplateId, TypeId,
};
pub use op::{DataOperation, OperationState};
pub use tag::Tag;
pub use template::{FeedTemplate, TemplateState};

/// Names of the document spaces each store-backed entity kind lives in.
///
/// The repository configurator creates every one of these before any
/// provider runs.
pub mod spaces {
    /// Category documents
    pub const CATEGORIES: &str = "categories";
    /// Feed documents
    pub const FEEDS: &str = "feeds";
    /// Datasource documents
    pub const DATASOURCES: &str = "datasources";
    /// Extensible type descriptors
    pub const TYPES: &str = "types";
    /// Extensible entity instances
    pub const ENTITIES: &str = "entities";
    /// Feed template documents
    pub const TEMPLATES: &str = "templates";
    /// Feed-manager category detail documents
    pub const CATEGORY_DETAILS: &str = "category_details";
    /// Feed-manager feed detail documents
    pub const FEED_DETAILS: &str = "feed_details";
    /// Catalog connector documents
    pub const CONNECTORS: &str = "connectors";
    /// Catalog data source documents
    pub const DATA_SOURCES: &str = "data_sources";
    /// Catalog data set documents
    pub const DATA_SETS: &str = "data_sets";

    /// All spaces the configurator must create, in creation order.
    pub const ALL: &[&str] = &[
        CATEGORIES,
        FEEDS,
        DATASOURCES,
        TYPES,
        ENTITIES,
        TEMPLATES,
        CATEGORY_DETAILS,
        FEED_DETAILS,
        CONNECTORS,
        DATA_SOURCES,
        DATA_SETS,
    ];
}
