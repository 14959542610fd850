//! Datasource Provider Port

use crate::entity::{Datasource, DatasourceId};
use crate::error::Result;
use async_trait::async_trait;

/// Port for datasource CRUD and lookup
#[async_trait]
pub trait DatasourceProvider: Send + Sync + std::fmt::Debug {
    /// Return the datasource with the given name, creating it if absent
    async fn ensure_datasource(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Datasource>;

    /// Fetch a datasource by id
    async fn find_by_id(&self, id: &DatasourceId) -> Result<Option<Datasource>>;

    /// Fetch a datasource by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Datasource>>;

    /// All datasources
    async fn list_datasources(&self) -> Result<Vec<Datasource>>;

    /// Delete a datasource; returns whether it existed
    async fn delete_datasource(&self, id: &DatasourceId) -> Result<bool>;
}
