//! Store-backed catalog connector provider

use crate::support::PropertyUtil;
use async_trait::async_trait;
use metahub_domain::entity::{Connector, ConnectorId, spaces};
use metahub_domain::error::{Error, Result};
use metahub_domain::ports::ConnectorProvider;
use std::sync::Arc;
use tracing::debug;

/// `ConnectorProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreConnectorProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreConnectorProvider {
    /// Create a connector provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }

    async fn set_active(&self, id: &ConnectorId, active: bool) -> Result<Connector> {
        let mut connector = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("connector '{id}'")))?;
        if connector.active == active {
            return Ok(connector);
        }

        connector.active = active;
        self.properties
            .write(spaces::CONNECTORS, &connector.id.to_string(), &connector)
            .await?;
        Ok(connector)
    }
}

#[async_trait]
impl ConnectorProvider for StoreConnectorProvider {
    async fn ensure_connector(&self, plugin_id: &str, title: &str) -> Result<Connector> {
        if let Some(existing) = self.find_by_plugin_id(plugin_id).await? {
            return Ok(existing);
        }

        let connector = Connector::new(plugin_id, title);
        self.properties
            .write(spaces::CONNECTORS, &connector.id.to_string(), &connector)
            .await?;
        debug!(plugin_id, "Created connector");
        Ok(connector)
    }

    async fn find_by_id(&self, id: &ConnectorId) -> Result<Option<Connector>> {
        self.properties
            .read(spaces::CONNECTORS, &id.to_string())
            .await
    }

    async fn find_by_plugin_id(&self, plugin_id: &str) -> Result<Option<Connector>> {
        let connectors: Vec<Connector> = self.properties.read_all(spaces::CONNECTORS).await?;
        Ok(connectors.into_iter().find(|c| c.plugin_id == plugin_id))
    }

    async fn list_connectors(&self, active_only: bool) -> Result<Vec<Connector>> {
        let mut connectors: Vec<Connector> = self.properties.read_all(spaces::CONNECTORS).await?;
        if active_only {
            connectors.retain(|c| c.active);
        }
        connectors.sort_by(|a, b| a.plugin_id.cmp(&b.plugin_id));
        Ok(connectors)
    }

    async fn activate(&self, id: &ConnectorId) -> Result<Connector> {
        self.set_active(id, true).await
    }

    async fn deactivate(&self, id: &ConnectorId) -> Result<Connector> {
        self.set_active(id, false).await
    }
}
