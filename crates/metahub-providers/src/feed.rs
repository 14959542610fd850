//! Store-backed feed provider

use crate::support::{PropertyUtil, StoreUtil};
use async_trait::async_trait;
use metahub_domain::entity::{Category, CategoryId, Feed, FeedId, FeedState, spaces};
use metahub_domain::error::{Error, Result};
use metahub_domain::events::{MetadataEvent, SharedChangeEventDispatcher};
use metahub_domain::ports::FeedProvider;
use std::sync::Arc;
use tracing::debug;

/// `FeedProvider` over the shared metadata store
#[derive(Debug)]
pub struct StoreFeedProvider {
    properties: Arc<PropertyUtil>,
    store_util: Arc<StoreUtil>,
    dispatcher: SharedChangeEventDispatcher,
}

impl StoreFeedProvider {
    /// Create a feed provider over the shared utilities
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

    async fn load(&self, id: &FeedId) -> Result<Feed> {
        self.properties
            .read(spaces::FEEDS, &id.to_string())
            .await?
            .ok_or_else(|| Error::not_found(format!("feed '{id}'")))
    }

    async fn save(&self, mut feed: Feed) -> Result<Feed> {
        feed.revision = self.store_util.next_revision(spaces::FEEDS, feed.revision);
        feed.touch();
        self.properties
            .write(spaces::FEEDS, &feed.id.to_string(), &feed)
            .await?;
        Ok(feed)
    }

    async fn set_state(&self, id: &FeedId, state: FeedState) -> Result<Feed> {
        let feed = self.load(id).await?;
        if feed.state == state {
            return Ok(feed);
        }

        let mut feed = feed;
        feed.state = state;
        let feed = self.save(feed).await?;
        self.dispatcher
            .dispatch(MetadataEvent::FeedStateChanged { id: *id, state })
            .await?;
        Ok(feed)
    }
}

#[async_trait]
impl FeedProvider for StoreFeedProvider {
    async fn ensure_feed(
        &self,
        category_id: &CategoryId,
        system_name: &str,
        description: Option<String>,
    ) -> Result<Feed> {
        if self
            .properties
            .read::<Category>(spaces::CATEGORIES, &category_id.to_string())
            .await?
            .is_none()
        {
            return Err(Error::not_found(format!("category '{category_id}'")));
        }

        if let Some(existing) = self.find_by_name(category_id, system_name).await? {
            return Ok(existing);
        }

        let feed = Feed::new(*category_id, system_name, description);
        self.properties
            .write(spaces::FEEDS, &feed.id.to_string(), &feed)
            .await?;
        debug!(system_name, %category_id, "Created feed");

        self.dispatcher
            .dispatch(MetadataEvent::FeedCreated {
                id: feed.id,
                category_id: *category_id,
                system_name: feed.system_name.clone(),
            })
            .await?;
        Ok(feed)
    }

    async fn find_by_id(&self, id: &FeedId) -> Result<Option<Feed>> {
        self.properties.read(spaces::FEEDS, &id.to_string()).await
    }

    async fn find_by_name(
        &self,
        category_id: &CategoryId,
        system_name: &str,
    ) -> Result<Option<Feed>> {
        let feeds: Vec<Feed> = self.properties.read_all(spaces::FEEDS).await?;
        Ok(feeds
            .into_iter()
            .find(|f| f.category_id == *category_id && f.system_name == system_name))
    }

    async fn list_feeds(&self) -> Result<Vec<Feed>> {
        let mut feeds: Vec<Feed> = self.properties.read_all(spaces::FEEDS).await?;
        feeds.sort_by(|a, b| a.system_name.cmp(&b.system_name));
        Ok(feeds)
    }

    async fn list_by_category(&self, category_id: &CategoryId) -> Result<Vec<Feed>> {
        let mut feeds: Vec<Feed> = self.properties.read_all(spaces::FEEDS).await?;
        feeds.retain(|f| f.category_id == *category_id);
        feeds.sort_by(|a, b| a.system_name.cmp(&b.system_name));
        Ok(feeds)
    }

    async fn enable_feed(&self, id: &FeedId) -> Result<Feed> {
        self.set_state(id, FeedState::Enabled).await
    }

    async fn disable_feed(&self, id: &FeedId) -> Result<Feed> {
        self.set_state(id, FeedState::Disabled).await
    }

    async fn add_tag(&self, id: &FeedId, tag: &str) -> Result<Feed> {
        let mut feed = self.load(id).await?;
        if feed.tags.iter().any(|t| t == tag) {
            return Ok(feed);
        }
        feed.tags.push(tag.to_string());
        self.save(feed).await
    }

    async fn set_precondition(&self, id: &FeedId, condition: Option<String>) -> Result<Feed> {
        let mut feed = self.load(id).await?;
        if feed.precondition == condition {
            return Ok(feed);
        }
        feed.precondition = condition;
        self.save(feed).await
    }

    async fn delete_feed(&self, id: &FeedId) -> Result<bool> {
        let key = id.to_string();
        let removed = self.properties.remove(spaces::FEEDS, &key).await?;
        if removed {
            // Drop the feed-manager detail record along with the feed
            self.properties.remove(spaces::FEED_DETAILS, &key).await?;
            self.dispatcher
                .dispatch(MetadataEvent::FeedDeleted { id: *id })
                .await?;
        }
        Ok(removed)
    }
}
