//! Catalog entities
//!
//! The catalog subdomain models where data physically lives: a
//! [`Connector`] describes an access technology, a [`DataSource`] is a
//! configured instance of a connector, and a [`DataSet`] is an addressable
//! collection within a data source.

use super::id::{ConnectorId, DataSetId, DataSourceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Unique identifier
    pub id: ConnectorId,
    /// Plugin this connector is backed by, unique within the repository
    pub plugin_id: String,
    /// Human-readable title
    pub title: String,
    /// Whether the connector may be used to create data sources
    pub active: bool,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl Connector {
    /// Create a new active connector
    pub fn new(plugin_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ConnectorId::new(),
            plugin_id: plugin_id.into(),
            title: title.into(),
            active: true,
            created: Utc::now(),
        }
    }
}

/// A configured instance of a connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Unique identifier
    pub id: DataSourceId,
    /// The connector this data source was created from
    pub connector_id: ConnectorId,
    /// Human-readable title, unique within the connector
    pub title: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl DataSource {
    /// Create a new data source under a connector
    pub fn new(connector_id: ConnectorId, title: impl Into<String>) -> Self {
        Self {
            id: DataSourceId::new(),
            connector_id,
            title: title.into(),
            created: Utc::now(),
        }
    }
}

/// An addressable collection within a data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    /// Unique identifier
    pub id: DataSetId,
    /// The data source this data set belongs to
    pub data_source_id: DataSourceId,
    /// Human-readable title, unique within the data source
    pub title: String,
    /// Storage format hint, e.g. "parquet" or "jdbc"
    pub format: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl DataSet {
    /// Create a new data set under a data source
    pub fn new(
        data_source_id: DataSourceId,
        title: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            id: DataSetId::new(),
            data_source_id,
            title: title.into(),
            format: format.into(),
            created: Utc::now(),
        }
    }
}
