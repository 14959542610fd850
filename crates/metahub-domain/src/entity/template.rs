//! Feed template entity

use super::id::TemplateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a feed template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemplateState {
    /// Template may be used to create feeds
    Enabled,
    /// Template is present but may not be used
    Disabled,
}

/// A reusable template feeds are created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedTemplate {
    /// Unique identifier
    pub id: TemplateId,
    /// Template name, unique within the repository
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Current lifecycle state
    pub state: TemplateState,
    /// Revision counter, bumped on every update
    pub revision: u64,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
}

impl FeedTemplate {
    /// Create a new template in the `Enabled` state
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TemplateId::new(),
            name: name.into(),
            description,
            state: TemplateState::Enabled,
            revision: 0,
            created: now,
            modified: now,
        }
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
