//! Store-backed category provider

use crate::support::{PropertyUtil, StoreUtil};
use async_trait::async_trait;
use metahub_domain::entity::{Category, CategoryId, Feed, spaces};
use metahub_domain::error::{Error, Result};
use metahub_domain::events::{MetadataEvent, SharedChangeEventDispatcher};
use metahub_domain::ports::CategoryProvider;
use std::sync::Arc;
use tracing::debug;

/// `CategoryProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreCategoryProvider {
    properties: Arc<PropertyUtil>,
    store_util: Arc<StoreUtil>,
    dispatcher: SharedChangeEventDispatcher,
}

impl StoreCategoryProvider {
    /// Create a category provider over the shared utilities
    pub fn new(
        properties: Arc<PropertyUtil>,
        store_util: Arc<StoreUtil>,
        dispatcher: SharedChangeEventDispatcher,
    ) -> Self {
        Self {
            properties,
            store_util,
            dispatcher,
        }
    }
}

#[async_trait]
impl CategoryProvider for StoreCategoryProvider {
    async fn ensure_category(
        &self,
        system_name: &str,
        display_name: &str,
        description: Option<String>,
    ) -> Result<Category> {
        if let Some(existing) = self.find_by_system_name(system_name).await? {
            return Ok(existing);
        }

        let category = Category::new(system_name, display_name, description);
        self.properties
            .write(spaces::CATEGORIES, &category.id.to_string(), &category)
            .await?;
        debug!(system_name, "Created category");

        self.dispatcher
            .dispatch(MetadataEvent::CategoryCreated {
                id: category.id,
                system_name: category.system_name.clone(),
            })
            .await?;
        Ok(category)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        self.properties
            .read(spaces::CATEGORIES, &id.to_string())
            .await
    }

    async fn find_by_system_name(&self, system_name: &str) -> Result<Option<Category>> {
        let categories: Vec<Category> = self.properties.read_all(spaces::CATEGORIES).await?;
        Ok(categories.into_iter().find(|c| c.system_name == system_name))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = self.properties.read_all(spaces::CATEGORIES).await?;
        categories.sort_by(|a, b| a.system_name.cmp(&b.system_name));
        Ok(categories)
    }

    async fn update_category(&self, mut category: Category) -> Result<Category> {
        let key = category.id.to_string();
        if self
            .properties
            .read::<Category>(spaces::CATEGORIES, &key)
            .await?
            .is_none()
        {
            return Err(Error::not_found(format!("category '{}'", category.id)));
        }

        category.revision = self
            .store_util
            .next_revision(spaces::CATEGORIES, category.revision);
        category.touch();
        self.properties
            .write(spaces::CATEGORIES, &key, &category)
            .await?;
        Ok(category)
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<bool> {
        let feeds: Vec<Feed> = self.properties.read_all(spaces::FEEDS).await?;
        if feeds.iter().any(|f| f.category_id == *id) {
            return Err(Error::invalid_argument(format!(
                "category '{id}' still has feeds"
            )));
        }

        let removed = self
            .properties
            .remove(spaces::CATEGORIES, &id.to_string())
            .await?;
        if removed {
            self.properties
                .remove(spaces::CATEGORY_DETAILS, &id.to_string())
                .await?;
            self.dispatcher
                .dispatch(MetadataEvent::CategoryDeleted { id: *id })
                .await?;
        }
        Ok(removed)
    }
}
