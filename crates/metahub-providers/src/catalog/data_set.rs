//! Store-backed catalog data set provider

use crate::support::PropertyUtil;
use async_trait::async_trait;
use metahub_domain::entity::{DataSet, DataSetId, DataSource, DataSourceId, spaces};
use metahub_domain::error::{Error, Result};
use metahub_domain::ports::DataSetProvider;
use std::sync::Arc;
use tracing::debug;

/// `DataSetProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreDataSetProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreDataSetProvider {
    /// Create a data set provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }
}

#[async_trait]
impl DataSetProvider for StoreDataSetProvider {
    async fn ensure_data_set(
        &self,
        data_source_id: &DataSourceId,
        title: &str,
        format: &str,
    ) -> Result<DataSet> {
        if self
            .properties
            .read::<DataSource>(spaces::DATA_SOURCES, &data_source_id.to_string())
            .await?
            .is_none()
        {
            return Err(Error::not_found(format!("data source '{data_source_id}'")));
        }

        let existing: Vec<DataSet> = self.properties.read_all(spaces::DATA_SETS).await?;
        if let Some(found) = existing
            .into_iter()
            .find(|d| d.data_source_id == *data_source_id && d.title == title)
        {
            return Ok(found);
        }

        let data_set = DataSet::new(*data_source_id, title, format);
        self.properties
            .write(spaces::DATA_SETS, &data_set.id.to_string(), &data_set)
            .await?;
        debug!(title, %data_source_id, "Created data set");
        Ok(data_set)
    }

    async fn find_by_id(&self, id: &DataSetId) -> Result<Option<DataSet>> {
        self.properties
            .read(spaces::DATA_SETS, &id.to_string())
            .await
    }

    async fn list_by_data_source(&self, data_source_id: &DataSourceId) -> Result<Vec<DataSet>> {
        let mut sets: Vec<DataSet> = self.properties.read_all(spaces::DATA_SETS).await?;
        sets.retain(|d| d.data_source_id == *data_source_id);
        sets.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(sets)
    }

    async fn delete_data_set(&self, id: &DataSetId) -> Result<bool> {
        self.properties
            .remove(spaces::DATA_SETS, &id.to_string())
            .await
    }
}
