//! Datasource entity

use super::id::DatasourceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A datasource feeds read from or write to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datasource {
    /// Unique identifier
    pub id: DatasourceId,
    /// Stable machine name, unique within the repository
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl Datasource {
    /// Create a new datasource with a fresh id
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: DatasourceId::new(),
            name: name.into(),
            description,
            created: Utc::now(),
        }
    }
}
