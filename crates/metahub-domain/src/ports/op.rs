//! Data Operations Provider Port

use crate::entity::{DataOperation, FeedId, OperationId};
use crate::error::Result;
use async_trait::async_trait;

/// Port for recording feed executions
///
/// Operations move from in-progress to exactly one terminal state; every
/// state change is dispatched as a change event.
#[async_trait]
pub trait DataOperationsProvider: Send + Sync + std::fmt::Debug {
    /// Begin a new in-progress operation for a feed
    async fn begin_operation(&self, feed_id: &FeedId, status: &str) -> Result<DataOperation>;

    /// Update the status message of an in-progress operation
    ///
    /// Fails with an invalid-argument error if the operation has already
    /// reached a terminal state.
    async fn update_progress(&self, id: &OperationId, status: &str) -> Result<DataOperation>;

    /// Move an in-progress operation to the `Success` state
    async fn complete_operation(&self, id: &OperationId, status: &str) -> Result<DataOperation>;

    /// Move an in-progress operation to the `Failure` state
    async fn fail_operation(&self, id: &OperationId, status: &str) -> Result<DataOperation>;

    /// Move an in-progress operation to the `Canceled` state
    async fn cancel_operation(&self, id: &OperationId, status: &str) -> Result<DataOperation>;

    /// Fetch an operation by id
    async fn find_operation(&self, id: &OperationId) -> Result<Option<DataOperation>>;

    /// All operations recorded for a feed, oldest first
    async fn list_operations(&self, feed_id: &FeedId) -> Result<Vec<DataOperation>>;
}
