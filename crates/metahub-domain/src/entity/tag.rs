//! Tag value type
//!
//! Tags are not stored on their own; they are aggregated from the feeds
//! that carry them.

use serde::{Deserialize, Serialize};

/// A tag name attached to one or more feeds
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag {
    /// The tag text
    pub name: String,
}

impl Tag {
    /// Create a tag
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}
