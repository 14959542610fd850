//! Store-backed datasource provider

use crate::support::PropertyUtil;
use async_trait::async_trait;
use metahub_domain::entity::{Datasource, DatasourceId, spaces};
use metahub_domain::error::Result;
use metahub_domain::ports::DatasourceProvider;
use std::sync::Arc;
use tracing::debug;

/// `DatasourceProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreDatasourceProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreDatasourceProvider {
    /// Create a datasource provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }
}

#[async_trait]
impl DatasourceProvider for StoreDatasourceProvider {
    async fn ensure_datasource(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Datasource> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok(existing);
        }

        let datasource = Datasource::new(name, description);
        self.properties
            .write(spaces::DATASOURCES, &datasource.id.to_string(), &datasource)
            .await?;
        debug!(name, "Created datasource");
        Ok(datasource)
    }

    async fn find_by_id(&self, id: &DatasourceId) -> Result<Option<Datasource>> {
        self.properties
            .read(spaces::DATASOURCES, &id.to_string())
            .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Datasource>> {
        let datasources: Vec<Datasource> = self.properties.read_all(spaces::DATASOURCES).await?;
        Ok(datasources.into_iter().find(|d| d.name == name))
    }

    async fn list_datasources(&self) -> Result<Vec<Datasource>> {
        let mut datasources: Vec<Datasource> =
            self.properties.read_all(spaces::DATASOURCES).await?;
        datasources.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(datasources)
    }

    async fn delete_datasource(&self, id: &DatasourceId) -> Result<bool> {
        self.properties
            .remove(spaces::DATASOURCES, &id.to_string())
            .await
    }
}
