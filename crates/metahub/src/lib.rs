//! # Metahub
//!
//! Metadata provider registries for data-catalog applications.
//!
//! Metahub supplies one provider singleton per metadata capability -
//! categories, feeds, datasources, extensible types and entities, tags,
//! feed-manager details, templates, data operations, change events - plus
//! a catalog subdomain of connectors, data sources, and data sets. All of
//! it is wired by explicit composition roots: no reflective container, no
//! lifecycle callbacks.
//!
//! ## Example
//!
//! ```no_run
//! use metahub::domain::ports::{CategoryProvider, ConnectorProvider, FeedProvider};
//! use metahub::registry::{AppConfig, init_catalog, init_metadata};
//!
//! # async fn example() -> metahub::Result<()> {
//! let registry = init_metadata(&AppConfig::default()).await?;
//!
//! let category = registry
//!     .categories()
//!     .ensure_category("accounts", "Accounts", None)
//!     .await?;
//! let feed = registry
//!     .feeds()
//!     .ensure_feed(&category.id, "daily-load", None)
//!     .await?;
//!
//! let catalog = init_catalog(registry.metadata_access()).await?;
//! let connector = catalog.connectors().ensure_connector("jdbc", "JDBC").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, ports, change events, errors
//! - `providers` - store backends and provider implementations
//! - `registry` - configuration, configurator, and the composition roots

/// Domain layer - entities, ports, change events, errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use metahub_domain::*;
}

/// Provider layer - store backends and provider implementations
pub mod providers {
    pub use metahub_providers::*;
}

/// Registry layer - configuration and composition roots
pub mod registry {
    pub use metahub_registry::*;
}

pub use metahub_domain::error::{Error, Result};
pub use metahub_registry::{CatalogRegistry, MetadataRegistry};

/// Initialize the metadata registry from configuration discovered in the
/// environment (defaults overlaid with `METAHUB_`-prefixed variables)
pub async fn init() -> Result<MetadataRegistry> {
    let config = metahub_registry::ConfigLoader::new().load()?;
    metahub_registry::init_metadata(&config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use metahub_domain::ports::MetadataAccess;

    #[tokio::test]
    async fn test_init_builds_a_working_registry() {
        let registry = init().await.unwrap();
        assert!(registry.metadata_access().is_configured());
    }
}
