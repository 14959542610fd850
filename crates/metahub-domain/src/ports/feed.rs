//! Feed Provider Port

use crate::entity::{CategoryId, Feed, FeedId};
use crate::error::Result;
use async_trait::async_trait;

/// Port for feed CRUD, state changes, and tagging
///
/// Feeds live under a category and are keyed by (category, system name).
/// Mutations emit change events through the dispatcher the implementation
/// was constructed with.
#[async_trait]
pub trait FeedProvider: Send + Sync + std::fmt::Debug {
    /// Return the feed with the given system name under a category,
    /// creating it if absent
    ///
    /// Fails with a not-found error if the category does not exist.
    async fn ensure_feed(
        &self,
        category_id: &CategoryId,
        system_name: &str,
        description: Option<String>,
    ) -> Result<Feed>;

    /// Fetch a feed by id
    async fn find_by_id(&self, id: &FeedId) -> Result<Option<Feed>>;

    /// Fetch a feed by (category, system name)
    async fn find_by_name(
        &self,
        category_id: &CategoryId,
        system_name: &str,
    ) -> Result<Option<Feed>>;

    /// All feeds
    async fn list_feeds(&self) -> Result<Vec<Feed>>;

    /// All feeds under a category
    async fn list_by_category(&self, category_id: &CategoryId) -> Result<Vec<Feed>>;

    /// Move a feed to the `Enabled` state; no-op if already enabled
    async fn enable_feed(&self, id: &FeedId) -> Result<Feed>;

    /// Move a feed to the `Disabled` state; no-op if already disabled
    async fn disable_feed(&self, id: &FeedId) -> Result<Feed>;

    /// Attach a tag to a feed; attaching an existing tag is a no-op
    async fn add_tag(&self, id: &FeedId, tag: &str) -> Result<Feed>;

    /// Set or clear the feed's precondition text
    async fn set_precondition(&self, id: &FeedId, condition: Option<String>) -> Result<Feed>;

    /// Delete a feed; returns whether it existed
    async fn delete_feed(&self, id: &FeedId) -> Result<bool>;
}
