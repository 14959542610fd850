//! Feed-Manager Template Provider Port

use crate::entity::{FeedTemplate, TemplateId};
use crate::error::Result;
use async_trait::async_trait;

/// Port for feed template CRUD and state changes
#[async_trait]
pub trait FeedManagerTemplateProvider: Send + Sync + std::fmt::Debug {
    /// Return the template with the given name, creating it if absent
    async fn ensure_template(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<FeedTemplate>;

    /// Fetch a template by id
    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<FeedTemplate>>;

    /// Fetch a template by name
    async fn find_by_name(&self, name: &str) -> Result<Option<FeedTemplate>>;

    /// All templates
    async fn list_templates(&self) -> Result<Vec<FeedTemplate>>;

    /// Move a template to the `Enabled` state; no-op if already enabled
    async fn enable_template(&self, id: &TemplateId) -> Result<FeedTemplate>;

    /// Move a template to the `Disabled` state; no-op if already disabled
    async fn disable_template(&self, id: &TemplateId) -> Result<FeedTemplate>;

    /// Delete a template; returns whether it existed
    ///
    /// Fails with an invalid-argument error while feed detail records still
    /// reference the template.
    async fn delete_template(&self, id: &TemplateId) -> Result<bool>;
}
