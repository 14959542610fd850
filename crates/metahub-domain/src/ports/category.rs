//! Category Provider Port

use crate::entity::{Category, CategoryId};
use crate::error::Result;
use async_trait::async_trait;

/// Port for category CRUD and lookup
///
/// Categories are keyed by a stable system name; `ensure_category` is the
/// create-if-absent entry point callers should prefer.
#[async_trait]
pub trait CategoryProvider: Send + Sync + std::fmt::Debug {
    /// Return the category with the given system name, creating it if absent
    async fn ensure_category(
        &self,
        system_name: &str,
        display_name: &str,
        description: Option<String>,
    ) -> Result<Category>;

    /// Fetch a category by id
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>>;

    /// Fetch a category by system name
    async fn find_by_system_name(&self, system_name: &str) -> Result<Option<Category>>;

    /// All categories
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Persist changes to an existing category; bumps its revision
    async fn update_category(&self, category: Category) -> Result<Category>;

    /// Delete a category; returns whether it existed
    ///
    /// Fails with an invalid-argument error while feeds still exist under
    /// the category.
    async fn delete_category(&self, id: &CategoryId) -> Result<bool>;
}
