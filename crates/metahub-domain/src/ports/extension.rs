//! Extensible Type and Entity Provider Ports

use crate::entity::{EntityId, ExtensibleEntity, ExtensibleType, FieldDescriptor, TypeId};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Port for managing extensible type schemas
#[async_trait]
pub trait ExtensibleTypeProvider: Send + Sync + std::fmt::Debug {
    /// Register a new type
    ///
    /// Fails with an already-exists error if the name is taken.
    async fn register_type(
        &self,
        name: &str,
        fields: Vec<FieldDescriptor>,
    ) -> Result<ExtensibleType>;

    /// Fetch a type by id
    async fn find_by_id(&self, id: &TypeId) -> Result<Option<ExtensibleType>>;

    /// Fetch a type by name
    async fn find_by_name(&self, name: &str) -> Result<Option<ExtensibleType>>;

    /// All registered types
    async fn list_types(&self) -> Result<Vec<ExtensibleType>>;

    /// Append a field to an existing type
    ///
    /// Fails with an already-exists error if the type already has a field
    /// with that name.
    async fn add_field(&self, id: &TypeId, field: FieldDescriptor) -> Result<ExtensibleType>;

    /// Delete a type; returns whether it existed
    async fn delete_type(&self, id: &TypeId) -> Result<bool>;
}

/// Port for managing instances of extensible types
#[async_trait]
pub trait ExtensibleEntityProvider: Send + Sync + std::fmt::Debug {
    /// Create an entity of a registered type
    ///
    /// Fails with a not-found error if the type is unknown and with an
    /// invalid-argument error if a required field is missing.
    async fn create_entity(
        &self,
        type_name: &str,
        properties: HashMap<String, serde_json::Value>,
    ) -> Result<ExtensibleEntity>;

    /// Fetch an entity by id
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<ExtensibleEntity>>;

    /// All entities of a given type
    async fn list_by_type(&self, type_id: &TypeId) -> Result<Vec<ExtensibleEntity>>;

    /// All entities
    async fn list_entities(&self) -> Result<Vec<ExtensibleEntity>>;

    /// Delete an entity; returns whether it existed
    async fn delete_entity(&self, id: &EntityId) -> Result<bool>;
}
