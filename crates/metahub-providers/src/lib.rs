//! # Metahub Providers
//!
//! Concrete provider implementations for the Metahub metadata registry.
//! Each provider implements a port (trait) defined in `metahub-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Store backend | `MetadataStore` | InMemory, Null |
//! | Category | `CategoryProvider` | Store-backed |
//! | Feed | `FeedProvider` | Store-backed |
//! | Datasource | `DatasourceProvider` | Store-backed |
//! | Extension | `ExtensibleTypeProvider`, `ExtensibleEntityProvider` | Store-backed |
//! | Tag | `TagProvider` | Store-backed |
//! | Feed manager | `FeedManagerCategoryProvider`, `FeedManagerFeedProvider`, `FeedManagerTemplateProvider` | Store-backed |
//! | Data operations | `DataOperationsProvider` | InMemory |
//! | Change events | `ChangeEventDispatcher` | Tokio broadcast |
//! | Catalog | `ConnectorProvider`, `DataSourceProvider`, `DataSetProvider` | Store-backed |
//!
//! Store backends self-register into the linkme registry declared in
//! `metahub-domain::ports::registry`; linking this crate is what makes
//! the `memory` and `null` backends resolvable by name.

// Re-export domain types commonly used with providers
pub use metahub_domain::error::{Error, Result};
pub use metahub_domain::ports::{MetadataAccess, MetadataStore};

/// Store backend implementations
pub mod store;

/// Repository access gatekeeper
pub mod access;

/// Property and store utilities shared by the providers
pub mod support;

/// Change-event dispatcher implementations
pub mod events;

/// Category provider
pub mod category;

/// Feed provider
pub mod feed;

/// Datasource provider
pub mod datasource;

/// Extensible type and entity providers
pub mod extension;

/// Tag provider
pub mod tag;

/// Feed template provider
pub mod template;

/// Feed-manager detail providers
pub mod feed_manager;

/// Data operations provider
pub mod op;

/// Catalog providers (connectors, data sources, data sets)
pub mod catalog;

pub use access::StoreMetadataAccess;
pub use catalog::{StoreConnectorProvider, StoreDataSetProvider, StoreDataSourceProvider};
pub use category::StoreCategoryProvider;
pub use datasource::StoreDatasourceProvider;
pub use events::BroadcastChangeEventDispatcher;
pub use extension::{StoreExtensibleEntityProvider, StoreExtensibleTypeProvider};
pub use feed::StoreFeedProvider;
pub use feed_manager::{StoreFeedManagerCategoryProvider, StoreFeedManagerFeedProvider};
pub use op::InMemoryDataOperationsProvider;
pub use store::{InMemoryMetadataStore, NullMetadataStore};
pub use support::{PropertyUtil, StoreUtil, VersionableTypes};
pub use tag::StoreTagProvider;
pub use template::StoreTemplateProvider;
