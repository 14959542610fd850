//! Provider ports
//!
//! One trait per metadata capability. Concrete implementations live in
//! `metahub-providers`; the registries in `metahub-registry` supply exactly
//! one instance per capability, constructed eagerly at start-up.

pub mod access;
pub mod catalog;
pub mod category;
pub mod datasource;
pub mod extension;
pub mod feed;
pub mod feed_manager;
pub mod op;
pub mod registry;
pub mod tag;
pub mod template;

pub use access::{MetadataAccess, MetadataStore};
pub use catalog::{ConnectorProvider, DataSetProvider, DataSourceProvider};
pub use category::CategoryProvider;
pub use datasource::DatasourceProvider;
pub use extension::{ExtensibleEntityProvider, ExtensibleTypeProvider};
pub use feed::FeedProvider;
pub use feed_manager::{FeedManagerCategoryProvider, FeedManagerFeedProvider};
pub use op::DataOperationsProvider;
pub use tag::TagProvider;
pub use template::FeedManagerTemplateProvider;
