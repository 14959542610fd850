//! Feed-Manager Provider Ports
//!
//! The feed-manager layer enriches base categories and feeds with detail
//! records: user-field schemas on categories, template bindings and
//! free-form properties on feeds.

use crate::entity::{CategoryDetail, CategoryId, FeedDetail, FeedId, TemplateId, UserField};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Port for feed-manager category detail
#[async_trait]
pub trait FeedManagerCategoryProvider: Send + Sync + std::fmt::Debug {
    /// Return the detail record for a category, creating an empty one if
    /// absent
    ///
    /// Fails with a not-found error if the category does not exist.
    async fn ensure_detail(&self, category_id: &CategoryId) -> Result<CategoryDetail>;

    /// Fetch the detail record for a category
    async fn find_detail(&self, category_id: &CategoryId) -> Result<Option<CategoryDetail>>;

    /// Replace the user-field schema for a category
    async fn set_user_fields(
        &self,
        category_id: &CategoryId,
        fields: Vec<UserField>,
    ) -> Result<CategoryDetail>;

    /// The user-field schema for a category; empty if no detail exists
    async fn get_user_fields(&self, category_id: &CategoryId) -> Result<Vec<UserField>>;
}

/// Port for feed-manager feed detail
#[async_trait]
pub trait FeedManagerFeedProvider: Send + Sync + std::fmt::Debug {
    /// Return the detail record for a feed, creating an empty one if absent
    ///
    /// Fails with a not-found error if the feed does not exist.
    async fn ensure_detail(&self, feed_id: &FeedId) -> Result<FeedDetail>;

    /// Fetch the detail record for a feed
    async fn find_detail(&self, feed_id: &FeedId) -> Result<Option<FeedDetail>>;

    /// Bind a feed to the template it was created from
    ///
    /// Fails with a not-found error if the template does not exist.
    async fn set_template(&self, feed_id: &FeedId, template_id: &TemplateId)
        -> Result<FeedDetail>;

    /// Merge free-form properties into a feed's detail record
    async fn set_properties(
        &self,
        feed_id: &FeedId,
        properties: HashMap<String, String>,
    ) -> Result<FeedDetail>;
}
