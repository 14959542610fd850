//! Store-backed feed-manager detail providers

use crate::support::PropertyUtil;
use async_trait::async_trait;
use chrono::Utc;
use metahub_domain::entity::{
    Category, CategoryDetail, CategoryId, Feed, FeedDetail, FeedId, FeedTemplate, TemplateId,
    UserField, spaces,
};
use metahub_domain::error::{Error, Result};
use metahub_domain::ports::{FeedManagerCategoryProvider, FeedManagerFeedProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// `FeedManagerCategoryProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreFeedManagerCategoryProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreFeedManagerCategoryProvider {
    /// Create a category-detail provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }
}

#[async_trait]
impl FeedManagerCategoryProvider for StoreFeedManagerCategoryProvider {
    async fn ensure_detail(&self, category_id: &CategoryId) -> Result<CategoryDetail> {
        let key = category_id.to_string();
        if self
            .properties
            .read::<Category>(spaces::CATEGORIES, &key)
            .await?
            .is_none()
        {
            return Err(Error::not_found(format!("category '{category_id}'")));
        }

        if let Some(detail) = self.find_detail(category_id).await? {
            return Ok(detail);
        }

        let detail = CategoryDetail::new(*category_id);
        self.properties
            .write(spaces::CATEGORY_DETAILS, &key, &detail)
            .await?;
        Ok(detail)
    }

    async fn find_detail(&self, category_id: &CategoryId) -> Result<Option<CategoryDetail>> {
        self.properties
            .read(spaces::CATEGORY_DETAILS, &category_id.to_string())
            .await
    }

    async fn set_user_fields(
        &self,
        category_id: &CategoryId,
        fields: Vec<UserField>,
    ) -> Result<CategoryDetail> {
        let mut detail = self.ensure_detail(category_id).await?;
        detail.user_fields = fields;
        detail.modified = Utc::now();
        self.properties
            .write(spaces::CATEGORY_DETAILS, &category_id.to_string(), &detail)
            .await?;
        Ok(detail)
    }

    async fn get_user_fields(&self, category_id: &CategoryId) -> Result<Vec<UserField>> {
        Ok(self
            .find_detail(category_id)
            .await?
            .map(|d| d.user_fields)
            .unwrap_or_default())
    }
}

/// `FeedManagerFeedProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreFeedManagerFeedProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreFeedManagerFeedProvider {
    /// Create a feed-detail provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }

    async fn save(&self, detail: &mut FeedDetail) -> Result<()> {
        detail.modified = Utc::now();
        self.properties
            .write(spaces::FEED_DETAILS, &detail.feed_id.to_string(), detail)
            .await
    }
}

#[async_trait]
impl FeedManagerFeedProvider for StoreFeedManagerFeedProvider {
    async fn ensure_detail(&self, feed_id: &FeedId) -> Result<FeedDetail> {
        let key = feed_id.to_string();
        if self
            .properties
            .read::<Feed>(spaces::FEEDS, &key)
            .await?
            .is_none()
        {
            return Err(Error::not_found(format!("feed '{feed_id}'")));
        }

        if let Some(detail) = self.find_detail(feed_id).await? {
            return Ok(detail);
        }

        let mut detail = FeedDetail::new(*feed_id);
        self.save(&mut detail).await?;
        Ok(detail)
    }

    async fn find_detail(&self, feed_id: &FeedId) -> Result<Option<FeedDetail>> {
        self.properties
            .read(spaces::FEED_DETAILS, &feed_id.to_string())
            .await
    }

    async fn set_template(
        &self,
        feed_id: &FeedId,
        template_id: &TemplateId,
    ) -> Result<FeedDetail> {
        if self
            .properties
            .read::<FeedTemplate>(spaces::TEMPLATES, &template_id.to_string())
            .await?
            .is_none()
        {
            return Err(Error::not_found(format!("template '{template_id}'")));
        }

        let mut detail = self.ensure_detail(feed_id).await?;
        detail.template_id = Some(*template_id);
        self.save(&mut detail).await?;
        Ok(detail)
    }

    async fn set_properties(
        &self,
        feed_id: &FeedId,
        properties: HashMap<String, String>,
    ) -> Result<FeedDetail> {
        let mut detail = self.ensure_detail(feed_id).await?;
        detail.properties.extend(properties);
        self.save(&mut detail).await?;
        Ok(detail)
    }
}
