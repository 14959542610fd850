//! Tokio Broadcast Change-Event Dispatcher
//!
//! Dispatcher implementation using tokio broadcast channels for in-process
//! event distribution.
//!
//! ## Features
//!
//! - In-process event broadcasting
//! - Multiple subscribers support
//! - Configurable channel capacity
//! - No persistence (events are ephemeral)

use async_trait::async_trait;
use futures::stream;
use metahub_domain::error::Result;
use metahub_domain::events::{ChangeEventDispatcher, MetadataEvent, MetadataEventStream};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Default channel capacity
const DEFAULT_CAPACITY: usize = 1024;

/// Change-event dispatcher using tokio broadcast channels
///
/// Events are broadcast to all active subscribers without persistence.
/// When the channel is full, the oldest events are dropped; configure
/// capacity based on expected event volume and subscriber speed.
#[derive(Clone)]
pub struct BroadcastChangeEventDispatcher {
    /// Broadcast sender for dispatching events
    sender: Arc<broadcast::Sender<MetadataEvent>>,
    /// Channel capacity
    capacity: usize,
}

impl BroadcastChangeEventDispatcher {
    /// Create a new dispatcher with default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// The current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastChangeEventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BroadcastChangeEventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastChangeEventDispatcher")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl ChangeEventDispatcher for BroadcastChangeEventDispatcher {
    async fn dispatch(&self, event: MetadataEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => {
                debug!("Dispatched event to {} subscribers", count);
            }
            Err(_) => {
                debug!("Dispatched event but no subscribers");
            }
        }
        Ok(())
    }

    async fn subscribe(&self) -> Result<MetadataEventStream> {
        let receiver = self.sender.subscribe();

        // Convert broadcast receiver to a Stream that handles lagged errors
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return None;
                    }
                }
            }
        });

        Ok(Box::pin(stream))
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use metahub_domain::entity::CategoryId;

    #[tokio::test]
    async fn test_subscribers_receive_dispatched_events() {
        let dispatcher = BroadcastChangeEventDispatcher::new();
        assert!(!dispatcher.has_subscribers());

        let mut stream = dispatcher.subscribe().await.unwrap();
        assert!(dispatcher.has_subscribers());

        let event = MetadataEvent::CategoryCreated {
            id: CategoryId::new(),
            system_name: "accounts".into(),
        };
        dispatcher.dispatch(event.clone()).await.unwrap();

        assert_eq!(stream.next().await, Some(event));
    }

    #[tokio::test]
    async fn test_dispatch_without_subscribers_succeeds() {
        let dispatcher = BroadcastChangeEventDispatcher::with_capacity(4);
        let event = MetadataEvent::CategoryDeleted {
            id: CategoryId::new(),
        };
        assert!(dispatcher.dispatch(event).await.is_ok());
    }
}
