//! Tag Provider Port

use crate::entity::Tag;
use crate::error::Result;
use async_trait::async_trait;

/// Port for tag lookup
///
/// Tags are derived from the feeds that carry them; this port only reads.
#[async_trait]
pub trait TagProvider: Send + Sync + std::fmt::Debug {
    /// All distinct tags, sorted by name
    async fn find_tags(&self) -> Result<Vec<Tag>>;

    /// All distinct tags whose name starts with the given prefix, sorted
    async fn matching_tags(&self, prefix: &str) -> Result<Vec<Tag>>;
}
