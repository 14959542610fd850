//! Catalog Provider Registry - composition root
//!
//! Builds the catalog-subdomain provider singletons: connectors, data
//! sources, and data sets. Independent of but complementary to the
//! metadata registry; it shares the repository through an
//! already-configured access handle and never re-runs the configurator.

use metahub_domain::error::{Error, Result};
use metahub_domain::ports::{
    ConnectorProvider, DataSetProvider, DataSourceProvider, MetadataAccess,
};
use metahub_providers::support::PropertyUtil;
use metahub_providers::{StoreConnectorProvider, StoreDataSetProvider, StoreDataSourceProvider};
use std::sync::Arc;
use tracing::info;

/// Catalog provider registry
///
/// Holds exactly one instance per catalog capability for the lifetime of
/// the registry. Construction happens only through [`init_catalog`].
pub struct CatalogRegistry {
    access: Arc<dyn MetadataAccess>,
    connectors: Arc<dyn ConnectorProvider>,
    data_sources: Arc<dyn DataSourceProvider>,
    data_sets: Arc<dyn DataSetProvider>,
}

impl CatalogRegistry {
    /// The repository access gatekeeper this registry was built over
    pub fn metadata_access(&self) -> Arc<dyn MetadataAccess> {
        self.access.clone()
    }

    /// The connector provider
    pub fn connectors(&self) -> Arc<dyn ConnectorProvider> {
        self.connectors.clone()
    }

    /// The data source provider
    pub fn data_sources(&self) -> Arc<dyn DataSourceProvider> {
        self.data_sources.clone()
    }

    /// The data set provider
    pub fn data_sets(&self) -> Arc<dyn DataSetProvider> {
        self.data_sets.clone()
    }
}

impl std::fmt::Debug for CatalogRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogRegistry")
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

/// Initialize the catalog provider registry
///
/// Requires an access handle whose repository configuration has already
/// completed; fails fast otherwise.
pub async fn init_catalog(access: Arc<dyn MetadataAccess>) -> Result<CatalogRegistry> {
    if !access.is_configured() {
        return Err(Error::not_configured(
            "catalog registry requires a configured metadata repository",
        ));
    }

    info!("Initializing catalog provider registry");

    let property_util = Arc::new(PropertyUtil::new(access.clone()));

    let connectors: Arc<dyn ConnectorProvider> =
        Arc::new(StoreConnectorProvider::new(property_util.clone()));
    let data_sources: Arc<dyn DataSourceProvider> =
        Arc::new(StoreDataSourceProvider::new(property_util.clone()));
    let data_sets: Arc<dyn DataSetProvider> =
        Arc::new(StoreDataSetProvider::new(property_util));

    info!("Created catalog providers");

    Ok(CatalogRegistry {
        access,
        connectors,
        data_sources,
        data_sets,
    })
}
