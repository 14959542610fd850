//! Catalog Provider Ports
//!
//! Ports for the catalog subdomain: connectors, data sources, and data
//! sets. Supplied by the catalog registry, independent of but
//! complementary to the metadata registry.

use crate::entity::{Connector, ConnectorId, DataSet, DataSetId, DataSource, DataSourceId};
use crate::error::Result;
use async_trait::async_trait;

/// Port for catalog connectors
#[async_trait]
pub trait ConnectorProvider: Send + Sync + std::fmt::Debug {
    /// Return the connector backed by the given plugin, creating it if
    /// absent
    async fn ensure_connector(&self, plugin_id: &str, title: &str) -> Result<Connector>;

    /// Fetch a connector by id
    async fn find_by_id(&self, id: &ConnectorId) -> Result<Option<Connector>>;

    /// Fetch a connector by plugin id
    async fn find_by_plugin_id(&self, plugin_id: &str) -> Result<Option<Connector>>;

    /// All connectors; `active_only` filters out deactivated ones
    async fn list_connectors(&self, active_only: bool) -> Result<Vec<Connector>>;

    /// Mark a connector usable for creating data sources
    async fn activate(&self, id: &ConnectorId) -> Result<Connector>;

    /// Mark a connector unusable for creating data sources
    async fn deactivate(&self, id: &ConnectorId) -> Result<Connector>;
}

/// Port for catalog data sources
#[async_trait]
pub trait DataSourceProvider: Send + Sync + std::fmt::Debug {
    /// Return the data source with the given title under a connector,
    /// creating it if absent
    ///
    /// Fails with a not-found error if the connector does not exist and
    /// with an invalid-argument error if it is deactivated.
    async fn ensure_data_source(
        &self,
        connector_id: &ConnectorId,
        title: &str,
    ) -> Result<DataSource>;

    /// Fetch a data source by id
    async fn find_by_id(&self, id: &DataSourceId) -> Result<Option<DataSource>>;

    /// All data sources
    async fn list_data_sources(&self) -> Result<Vec<DataSource>>;

    /// All data sources created from a connector
    async fn list_by_connector(&self, connector_id: &ConnectorId) -> Result<Vec<DataSource>>;

    /// Delete a data source; returns whether it existed
    async fn delete_data_source(&self, id: &DataSourceId) -> Result<bool>;
}

/// Port for catalog data sets
#[async_trait]
pub trait DataSetProvider: Send + Sync + std::fmt::Debug {
    /// Return the data set with the given title under a data source,
    /// creating it if absent
    ///
    /// Fails with a not-found error if the data source does not exist.
    async fn ensure_data_set(
        &self,
        data_source_id: &DataSourceId,
        title: &str,
        format: &str,
    ) -> Result<DataSet>;

    /// Fetch a data set by id
    async fn find_by_id(&self, id: &DataSetId) -> Result<Option<DataSet>>;

    /// All data sets within a data source
    async fn list_by_data_source(&self, data_source_id: &DataSourceId) -> Result<Vec<DataSet>>;

    /// Delete a data set; returns whether it existed
    async fn delete_data_set(&self, id: &DataSetId) -> Result<bool>;
}
