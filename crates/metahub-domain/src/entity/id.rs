//! Typed entity identifiers
//!
//! Each entity kind gets its own id newtype over [`uuid::Uuid`] so ids of
//! different kinds cannot be confused at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

entity_id!(
    /// Identifier for a [`super::Category`]
    CategoryId
);
entity_id!(
    /// Identifier for a [`super::Feed`]
    FeedId
);
entity_id!(
    /// Identifier for a [`super::Datasource`]
    DatasourceId
);
entity_id!(
    /// Identifier for an [`super::ExtensibleType`]
    TypeId
);
entity_id!(
    /// Identifier for an [`super::ExtensibleEntity`]
    EntityId
);
entity_id!(
    /// Identifier for a [`super::FeedTemplate`]
    TemplateId
);
entity_id!(
    /// Identifier for a [`super::DataOperation`]
    OperationId
);
entity_id!(
    /// Identifier for a catalog [`super::Connector`]
    ConnectorId
);
entity_id!(
    /// Identifier for a catalog [`super::DataSource`]
    DataSourceId
);
entity_id!(
    /// Identifier for a catalog [`super::DataSet`]
    DataSetId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(FeedId::new(), FeedId::new());
    }

    #[test]
    fn test_id_round_trips_through_string() {
        let id = CategoryId::new();
        let parsed: CategoryId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = FeedId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
