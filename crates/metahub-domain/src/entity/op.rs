//! Data operation entity
//!
//! A data operation records one execution of a feed: begun in progress,
//! then completed, failed, or canceled.

use super::id::{FeedId, OperationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of a data operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationState {
    /// Operation has begun and is still running
    InProgress,
    /// Operation finished successfully
    Success,
    /// Operation finished with a failure
    Failure,
    /// Operation was canceled before finishing
    Canceled,
}

impl OperationState {
    /// Whether the operation has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One execution of a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataOperation {
    /// Unique identifier
    pub id: OperationId,
    /// The feed this operation belongs to
    pub feed_id: FeedId,
    /// Current state
    pub state: OperationState,
    /// Free-form status message
    pub status: String,
    /// When the operation began
    pub started: DateTime<Utc>,
    /// When the operation reached a terminal state, if it has
    pub stopped: Option<DateTime<Utc>>,
}

impl DataOperation {
    /// Begin a new in-progress operation for a feed
    pub fn begin(feed_id: FeedId, status: impl Into<String>) -> Self {
        Self {
            id: OperationId::new(),
            feed_id,
            state: OperationState::InProgress,
            status: status.into(),
            started: Utc::now(),
            stopped: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_is_in_progress() {
        let op = DataOperation::begin(FeedId::new(), "starting");
        assert_eq!(op.state, OperationState::InProgress);
        assert!(op.stopped.is_none());
        assert!(!op.state.is_terminal());
    }
}
