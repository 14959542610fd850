//! Category entity
//!
//! Categories group feeds under a stable system name. The feed-manager
//! layer attaches a [`CategoryDetail`] carrying the user-field schema.

use super::id::CategoryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Stable machine name, unique within the repository
    pub system_name: String,
    /// Human-readable name
    pub display_name: String,
    /// Optional description
    pub description: Option<String>,
    /// Revision counter, bumped on every update
    pub revision: u64,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
}

impl Category {
    /// Create a new category with a fresh id and timestamps
    pub fn new(
        system_name: impl Into<String>,
        display_name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            system_name: system_name.into(),
            display_name: display_name.into(),
            description,
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

/// A user-defined field attached to a category or feed by the feed manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserField {
    /// Stable field name
    pub name: String,
    /// Human-readable label
    pub display_name: String,
    /// Whether a value must be supplied
    pub required: bool,
    /// Display ordering hint
    pub order: u32,
}

/// Feed-manager detail attached to a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    /// The category this detail belongs to
    pub category_id: CategoryId,
    /// User-field schema applied to feeds created under this category
    pub user_fields: Vec<UserField>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
}

impl CategoryDetail {
    /// Create an empty detail record for a category
    pub fn new(category_id: CategoryId) -> Self {
        Self {
            category_id,
            user_fields: Vec::new(),
            modified: Utc::now(),
        }
    }
}
