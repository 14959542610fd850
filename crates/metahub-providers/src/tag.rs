//! Store-backed tag provider
//!
//! Tags are aggregated from the feeds that carry them; nothing is stored
//! under a tag space.

use crate::support::PropertyUtil;
use async_trait::async_trait;
use metahub_domain::entity::{Feed, Tag, spaces};
use metahub_domain::error::Result;
use metahub_domain::ports::TagProvider;
use std::collections::BTreeSet;
use std::sync::Arc;

/// `TagProvider` derived from feed documents
#[derive(Debug)]
pub struct StoreTagProvider {
    properties: Arc<PropertyUtil>,
}

impl StoreTagProvider {
    /// Create a tag provider over the shared property util
    pub fn new(properties: Arc<PropertyUtil>) -> Self {
        Self { properties }
    }

    async fn distinct_tags(&self) -> Result<BTreeSet<String>> {
        let feeds: Vec<Feed> = self.properties.read_all(spaces::FEEDS).await?;
        Ok(feeds.into_iter().flat_map(|f| f.tags).collect())
    }
}

#[async_trait]
impl TagProvider for StoreTagProvider {
    async fn find_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.distinct_tags().await?.into_iter().map(Tag::new).collect())
    }

    async fn matching_tags(&self, prefix: &str) -> Result<Vec<Tag>> {
        Ok(self
            .distinct_tags()
            .await?
            .into_iter()
            .filter(|t| t.starts_with(prefix))
            .map(Tag::new)
            .collect())
    }
}
