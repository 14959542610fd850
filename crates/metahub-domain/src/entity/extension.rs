//! Extensible types and entities
//!
//! An [`ExtensibleType`] is a named schema of [`FieldDescriptor`]s.
//! [`ExtensibleEntity`] instances are property bags validated against a
//! registered type. The configurator seeds the built-in `category` and
//! `feed` base types at start-up.

use super::id::{EntityId, TypeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Describes one field of an extensible type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Stable field name
    pub name: String,
    /// Human-readable label
    pub display_name: String,
    /// Whether entities must supply a value for this field
    pub required: bool,
}

impl FieldDescriptor {
    /// Create a field descriptor; the display name defaults to the name
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            required,
        }
    }

    /// Set the human-readable label
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }
}

/// A registered extensible type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensibleType {
    /// Unique identifier
    pub id: TypeId,
    /// Type name, unique within the repository
    pub name: String,
    /// Field schema
    pub fields: Vec<FieldDescriptor>,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl ExtensibleType {
    /// Create a new type with a fresh id
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            id: TypeId::new(),
            name: name.into(),
            fields,
            created: Utc::now(),
        }
    }

    /// Names of fields entities of this type must supply
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }
}

/// An instance of an extensible type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensibleEntity {
    /// Unique identifier
    pub id: EntityId,
    /// The registered type this entity conforms to
    pub type_id: TypeId,
    /// Property values keyed by field name
    pub properties: HashMap<String, serde_json::Value>,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl ExtensibleEntity {
    /// Create a new entity with a fresh id
    pub fn new(type_id: TypeId, properties: HashMap<String, serde_json::Value>) -> Self {
        Self {
            id: EntityId::new(),
            type_id,
            properties,
            created: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let ty = ExtensibleType::new(
            "feed",
            vec![
                FieldDescriptor::new("systemName", true),
                FieldDescriptor::new("title", false),
            ],
        );
        let required: Vec<_> = ty.required_fields().collect();
        assert_eq!(required, vec!["systemName"]);
    }
}
