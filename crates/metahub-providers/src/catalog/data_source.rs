//! Store-backed catalog data source provider

use crate::support::PropertyUtil;
use async_trait::async_trait;
use metahub_domain::entity::{Connector, ConnectorId, DataSource, DataSourceId, spaces};
use metahub_domain::error::{Error, Result};
use metahub_domain::ports::DataSourceProvider;
use std::sync::Arc;
use tracing::debug;

/// `DataSourceProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreDataSourceProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreDataSourceProvider {
    /// Create a data source provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }
}

#[async_trait]
impl DataSourceProvider for StoreDataSourceProvider {
    async fn ensure_data_source(
        &self,
        connector_id: &ConnectorId,
        title: &str,
    ) -> Result<DataSource> {
        let connector: Connector = self
            .properties
            .read(spaces::CONNECTORS, &connector_id.to_string())
            .await?
            .ok_or_else(|| Error::not_found(format!("connector '{connector_id}'")))?;
        if !connector.active {
            return Err(Error::invalid_argument(format!(
                "connector '{connector_id}' is deactivated"
            )));
        }

        let existing: Vec<DataSource> = self.properties.read_all(spaces::DATA_SOURCES).await?;
        if let Some(found) = existing
            .into_iter()
            .find(|d| d.connector_id == *connector_id && d.title == title)
        {
            return Ok(found);
        }

        let data_source = DataSource::new(*connector_id, title);
        self.properties
            .write(
                spaces::DATA_SOURCES,
                &data_source.id.to_string(),
                &data_source,
            )
            .await?;
        debug!(title, %connector_id, "Created data source");
        Ok(data_source)
    }

    async fn find_by_id(&self, id: &DataSourceId) -> Result<Option<DataSource>> {
        self.properties
            .read(spaces::DATA_SOURCES, &id.to_string())
            .await
    }

    async fn list_data_sources(&self) -> Result<Vec<DataSource>> {
        let mut sources: Vec<DataSource> = self.properties.read_all(spaces::DATA_SOURCES).await?;
        sources.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(sources)
    }

    async fn list_by_connector(&self, connector_id: &ConnectorId) -> Result<Vec<DataSource>> {
        let mut sources: Vec<DataSource> = self.properties.read_all(spaces::DATA_SOURCES).await?;
        sources.retain(|d| d.connector_id == *connector_id);
        sources.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(sources)
    }

    async fn delete_data_source(&self, id: &DataSourceId) -> Result<bool> {
        self.properties
            .remove(spaces::DATA_SOURCES, &id.to_string())
            .await
    }
}
