//! In-memory data operations provider
//!
//! Operation records are ephemeral run history, not repository metadata,
//! so they are held in process memory rather than the store.

use async_trait::async_trait;
use chrono::Utc;
use metahub_domain::entity::{DataOperation, FeedId, OperationId, OperationState};
use metahub_domain::error::{Error, Result};
use metahub_domain::events::{MetadataEvent, SharedChangeEventDispatcher};
use metahub_domain::ports::DataOperationsProvider;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// `DataOperationsProvider` over an in-process operation table
#[derive(Debug)]
pub struct InMemoryDataOperationsProvider {
    operations: RwLock<HashMap<OperationId, DataOperation>>,
    dispatcher: SharedChangeEventDispatcher,
}

impl InMemoryDataOperationsProvider {
    /// Create an empty operations provider
    pub fn new(dispatcher: SharedChangeEventDispatcher) -> Self {
        Self {
            operations: RwLock::new(HashMap::new()),
            dispatcher,
        }
    }

    async fn transition(
        &self,
        id: &OperationId,
        state: OperationState,
        status: &str,
    ) -> Result<DataOperation> {
        let updated = {
            let mut operations = self.operations.write().await;
            let op = operations
                .get_mut(id)
                .ok_or_else(|| Error::not_found(format!("operation '{id}'")))?;
            if op.state.is_terminal() {
                return Err(Error::invalid_argument(format!(
                    "operation '{id}' already finished"
                )));
            }

            op.state = state;
            op.status = status.to_string();
            op.stopped = Some(Utc::now());
            op.clone()
        };

        self.dispatcher
            .dispatch(MetadataEvent::OperationStateChanged {
                id: *id,
                feed_id: updated.feed_id,
                state,
            })
            .await?;
        Ok(updated)
    }
}

#[async_trait]
impl DataOperationsProvider for InMemoryDataOperationsProvider {
    async fn begin_operation(&self, feed_id: &FeedId, status: &str) -> Result<DataOperation> {
        let op = DataOperation::begin(*feed_id, status);
        self.operations.write().await.insert(op.id, op.clone());
        debug!(%feed_id, operation = %op.id, "Began operation");

        self.dispatcher
            .dispatch(MetadataEvent::OperationStateChanged {
                id: op.id,
                feed_id: *feed_id,
                state: OperationState::InProgress,
            })
            .await?;
        Ok(op)
    }

    async fn update_progress(&self, id: &OperationId, status: &str) -> Result<DataOperation> {
        let mut operations = self.operations.write().await;
        let op = operations
            .get_mut(id)
            .ok_or_else(|| Error::not_found(format!("operation '{id}'")))?;
        if op.state.is_terminal() {
            return Err(Error::invalid_argument(format!(
                "operation '{id}' already finished"
            )));
        }

        op.status = status.to_string();
        Ok(op.clone())
    }

    async fn complete_operation(&self, id: &OperationId, status: &str) -> Result<DataOperation> {
        self.transition(id, OperationState::Success, status).await
    }

    async fn fail_operation(&self, id: &OperationId, status: &str) -> Result<DataOperation> {
        self.transition(id, OperationState::Failure, status).await
    }

    async fn cancel_operation(&self, id: &OperationId, status: &str) -> Result<DataOperation> {
        self.transition(id, OperationState::Canceled, status).await
    }

    async fn find_operation(&self, id: &OperationId) -> Result<Option<DataOperation>> {
        Ok(self.operations.read().await.get(id).cloned())
    }

    async fn list_operations(&self, feed_id: &FeedId) -> Result<Vec<DataOperation>> {
        let mut ops: Vec<DataOperation> = self
            .operations
            .read()
            .await
            .values()
            .filter(|op| op.feed_id == *feed_id)
            .cloned()
            .collect();
        ops.sort_by_key(|op| op.started);
        Ok(ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::BroadcastChangeEventDispatcher;

    fn provider() -> InMemoryDataOperationsProvider {
        InMemoryDataOperationsProvider::new(BroadcastChangeEventDispatcher::new_shared())
    }

    #[tokio::test]
    async fn test_operation_lifecycle() {
        let ops = provider();
        let feed = FeedId::new();

        let op = ops.begin_operation(&feed, "starting").await.unwrap();
        assert_eq!(op.state, OperationState::InProgress);

        let op = ops.update_progress(&op.id, "halfway").await.unwrap();
        assert_eq!(op.status, "halfway");

        let op = ops.complete_operation(&op.id, "done").await.unwrap();
        assert_eq!(op.state, OperationState::Success);
        assert!(op.stopped.is_some());
    }

    #[tokio::test]
    async fn test_finished_operation_rejects_changes() {
        let ops = provider();
        let feed = FeedId::new();

        let op = ops.begin_operation(&feed, "starting").await.unwrap();
        ops.fail_operation(&op.id, "boom").await.unwrap();

        let err = ops.update_progress(&op.id, "late").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        let err = ops.complete_operation(&op.id, "late").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_list_operations_is_per_feed_and_ordered() {
        let ops = provider();
        let feed_a = FeedId::new();
        let feed_b = FeedId::new();

        let first = ops.begin_operation(&feed_a, "one").await.unwrap();
        let second = ops.begin_operation(&feed_a, "two").await.unwrap();
        ops.begin_operation(&feed_b, "other").await.unwrap();

        let listed = ops.list_operations(&feed_a).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }
}
