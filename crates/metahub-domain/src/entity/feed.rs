//! Feed entity

use super::id::{CategoryId, FeedId, TemplateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle state of a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedState {
    /// Feed is active and may run operations
    Enabled,
    /// Feed is present but inactive
    Disabled,
}

/// A feed registered under a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Unique identifier
    pub id: FeedId,
    /// Owning category
    pub category_id: CategoryId,
    /// Stable machine name, unique within the category
    pub system_name: String,
    /// Optional description
    pub description: Option<String>,
    /// Current lifecycle state
    pub state: FeedState,
    /// Tag names attached to this feed
    pub tags: Vec<String>,
    /// Condition text that must hold before the feed may run, if any
    pub precondition: Option<String>,
    /// Revision counter, bumped on every update
    pub revision: u64,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
}

impl Feed {
    /// Create a new feed in the `Enabled` state
    pub fn new(
        category_id: CategoryId,
        system_name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: FeedId::new(),
            category_id,
            system_name: system_name.into(),
            description,
            state: FeedState::Enabled,
            tags: Vec::new(),
            precondition: None,
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

/// Feed-manager detail attached to a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedDetail {
    /// The feed this detail belongs to
    pub feed_id: FeedId,
    /// Template the feed was created from, if any
    pub template_id: Option<TemplateId>,
    /// Free-form feed-manager properties
    pub properties: HashMap<String, String>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
}

impl FeedDetail {
    /// Create an empty detail record for a feed
    pub fn new(feed_id: FeedId) -> Self {
        Self {
            feed_id,
            template_id: None,
            properties: HashMap::new(),
            modified: Utc::now(),
        }
    }
}
