//! Store-backed extensible type and entity providers

use crate::support::PropertyUtil;
use async_trait::async_trait;
use metahub_domain::entity::{
    EntityId, ExtensibleEntity, ExtensibleType, FieldDescriptor, TypeId, spaces,
};
use metahub_domain::error::{Error, Result};
use metahub_domain::ports::{ExtensibleEntityProvider, ExtensibleTypeProvider};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// `ExtensibleTypeProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreExtensibleTypeProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreExtensibleTypeProvider {
    /// Create a type provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }
}

#[async_trait]
impl ExtensibleTypeProvider for StoreExtensibleTypeProvider {
    async fn register_type(
        &self,
        name: &str,
        fields: Vec<FieldDescriptor>,
    ) -> Result<ExtensibleType> {
        if self.find_by_name(name).await?.is_some() {
            return Err(Error::already_exists(format!("type '{name}'")));
        }

        let ty = ExtensibleType::new(name, fields);
        self.properties
            .write(spaces::TYPES, &ty.id.to_string(), &ty)
            .await?;
        debug!(name, "Registered extensible type");
        Ok(ty)
    }

    async fn find_by_id(&self, id: &TypeId) -> Result<Option<ExtensibleType>> {
        self.properties.read(spaces::TYPES, &id.to_string()).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ExtensibleType>> {
        let types: Vec<ExtensibleType> = self.properties.read_all(spaces::TYPES).await?;
        Ok(types.into_iter().find(|t| t.name == name))
    }

    async fn list_types(&self) -> Result<Vec<ExtensibleType>> {
        let mut types: Vec<ExtensibleType> = self.properties.read_all(spaces::TYPES).await?;
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn add_field(&self, id: &TypeId, field: FieldDescriptor) -> Result<ExtensibleType> {
        let mut ty = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("type '{id}'")))?;

        if ty.fields.iter().any(|f| f.name == field.name) {
            return Err(Error::already_exists(format!(
                "field '{}' on type '{}'",
                field.name, ty.name
            )));
        }

        ty.fields.push(field);
        self.properties
            .write(spaces::TYPES, &ty.id.to_string(), &ty)
            .await?;
        Ok(ty)
    }

    async fn delete_type(&self, id: &TypeId) -> Result<bool> {
        let entities: Vec<ExtensibleEntity> = self.properties.read_all(spaces::ENTITIES).await?;
        if entities.iter().any(|e| e.type_id == *id) {
            return Err(Error::invalid_argument(format!(
                "type '{id}' still has entities"
            )));
        }

        self.properties.remove(spaces::TYPES, &id.to_string()).await
    }
}

/// `ExtensibleEntityProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreExtensibleEntityProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreExtensibleEntityProvider {
    /// Create an entity provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }
}

#[async_trait]
impl ExtensibleEntityProvider for StoreExtensibleEntityProvider {
    async fn create_entity(
        &self,
        type_name: &str,
        properties: HashMap<String, serde_json::Value>,
    ) -> Result<ExtensibleEntity> {
        let types: Vec<ExtensibleType> = self.properties.read_all(spaces::TYPES).await?;
        let ty = types
            .into_iter()
            .find(|t| t.name == type_name)
            .ok_or_else(|| Error::not_found(format!("type '{type_name}'")))?;

        let missing: Vec<&str> = ty
            .required_fields()
            .filter(|name| !properties.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(Error::invalid_argument(format!(
                "entity of type '{type_name}' is missing required fields: {missing:?}"
            )));
        }

        let entity = ExtensibleEntity::new(ty.id, properties);
        self.properties
            .write(spaces::ENTITIES, &entity.id.to_string(), &entity)
            .await?;
        Ok(entity)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<ExtensibleEntity>> {
        self.properties
            .read(spaces::ENTITIES, &id.to_string())
            .await
    }

    async fn list_by_type(&self, type_id: &TypeId) -> Result<Vec<ExtensibleEntity>> {
        let mut entities: Vec<ExtensibleEntity> =
            self.properties.read_all(spaces::ENTITIES).await?;
        entities.retain(|e| e.type_id == *type_id);
        Ok(entities)
    }

    async fn list_entities(&self) -> Result<Vec<ExtensibleEntity>> {
        self.properties.read_all(spaces::ENTITIES).await
    }

    async fn delete_entity(&self, id: &EntityId) -> Result<bool> {
        self.properties
            .remove(spaces::ENTITIES, &id.to_string())
            .await
    }
}
