//! Store-backed feed template provider

use crate::support::{PropertyUtil, StoreUtil};
use async_trait::async_trait;
use metahub_domain::entity::{FeedDetail, FeedTemplate, TemplateId, TemplateState, spaces};
use metahub_domain::error::{Error, Result};
use metahub_domain::events::{MetadataEvent, SharedChangeEventDispatcher};
use metahub_domain::ports::FeedManagerTemplateProvider;
use std::sync::Arc;
use tracing::debug;

/// `FeedManagerTemplateProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreTemplateProvider {
    properties: Arc<PropertyUtil>,
    store_util: Arc<StoreUtil>,
    dispatcher: SharedChangeEventDispatcher,
}

impl StoreTemplateProvider {
    /// Create a template provider over the shared utilities
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

    async fn set_state(&self, id: &TemplateId, state: TemplateState) -> Result<FeedTemplate> {
        let mut template = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("template '{id}'")))?;
        if template.state == state {
            return Ok(template);
        }

        template.state = state;
        template.revision = self
            .store_util
            .next_revision(spaces::TEMPLATES, template.revision);
        template.touch();
        self.properties
            .write(spaces::TEMPLATES, &template.id.to_string(), &template)
            .await?;

        self.dispatcher
            .dispatch(MetadataEvent::TemplateStateChanged { id: *id, state })
            .await?;
        Ok(template)
    }
}

#[async_trait]
impl FeedManagerTemplateProvider for StoreTemplateProvider {
    async fn ensure_template(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<FeedTemplate> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok(existing);
        }

        let template = FeedTemplate::new(name, description);
        self.properties
            .write(spaces::TEMPLATES, &template.id.to_string(), &template)
            .await?;
        debug!(name, "Created template");

        self.dispatcher
            .dispatch(MetadataEvent::TemplateCreated {
                id: template.id,
                name: template.name.clone(),
            })
            .await?;
        Ok(template)
    }

    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<FeedTemplate>> {
        self.properties
            .read(spaces::TEMPLATES, &id.to_string())
            .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<FeedTemplate>> {
        let templates: Vec<FeedTemplate> = self.properties.read_all(spaces::TEMPLATES).await?;
        Ok(templates.into_iter().find(|t| t.name == name))
    }

    async fn list_templates(&self) -> Result<Vec<FeedTemplate>> {
        let mut templates: Vec<FeedTemplate> = self.properties.read_all(spaces::TEMPLATES).await?;
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    async fn enable_template(&self, id: &TemplateId) -> Result<FeedTemplate> {
        self.set_state(id, TemplateState::Enabled).await
    }

    async fn disable_template(&self, id: &TemplateId) -> Result<FeedTemplate> {
        self.set_state(id, TemplateState::Disabled).await
    }

    async fn delete_template(&self, id: &TemplateId) -> Result<bool> {
        let details: Vec<FeedDetail> = self.properties.read_all(spaces::FEED_DETAILS).await?;
        if details.iter().any(|d| d.template_id == Some(*id)) {
            return Err(Error::invalid_argument(format!(
                "template '{id}' is still referenced by feeds"
            )));
        }

        self.properties
            .remove(spaces::TEMPLATES, &id.to_string())
            .await
    }
}
