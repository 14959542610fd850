//! Change events and the dispatcher port
//!
//! Defines the contract for broadcasting metadata change notifications.
//! Providers publish events through this abstraction without coupling to a
//! specific transport (tokio broadcast, message bus, etc.).

use crate::entity::{
    CategoryId, FeedId, FeedState, OperationId, OperationState, TemplateId, TemplateState,
};
use crate::error::Result;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::sync::Arc;

/// Metadata change notifications
///
/// Emitted by providers after a successful mutation. Subscribers react
/// without being coupled to the provider that produced the change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MetadataEvent {
    /// A category was created
    CategoryCreated {
        /// The new category
        id: CategoryId,
        /// Its stable system name
        system_name: String,
    },
    /// A category was deleted
    CategoryDeleted {
        /// The deleted category
        id: CategoryId,
    },
    /// A feed was created
    FeedCreated {
        /// The new feed
        id: FeedId,
        /// The category it was created under
        category_id: CategoryId,
        /// Its stable system name
        system_name: String,
    },
    /// A feed changed lifecycle state
    FeedStateChanged {
        /// The feed
        id: FeedId,
        /// The state it changed to
        state: FeedState,
    },
    /// A feed was deleted
    FeedDeleted {
        /// The deleted feed
        id: FeedId,
    },
    /// A template was created
    TemplateCreated {
        /// The new template
        id: TemplateId,
        /// Its name
        name: String,
    },
    /// A template changed lifecycle state
    TemplateStateChanged {
        /// The template
        id: TemplateId,
        /// The state it changed to
        state: TemplateState,
    },
    /// A data operation changed state
    OperationStateChanged {
        /// The operation
        id: OperationId,
        /// The feed it belongs to
        feed_id: FeedId,
        /// The state it changed to
        state: OperationState,
    },
}

/// Stream of metadata events delivered to a subscriber
pub type MetadataEventStream = Pin<Box<dyn Stream<Item = MetadataEvent> + Send>>;

/// Port for dispatching metadata change events
///
/// "Successfully dispatched" means the event was handed to the transport,
/// not that any subscriber received it.
#[async_trait]
pub trait ChangeEventDispatcher: Send + Sync + std::fmt::Debug {
    /// Dispatch an event to all subscribers
    async fn dispatch(&self, event: MetadataEvent) -> Result<()>;

    /// Subscribe to all future events
    async fn subscribe(&self) -> Result<MetadataEventStream>;

    /// Whether at least one subscriber is currently listening
    fn has_subscribers(&self) -> bool;
}

/// Shared dispatcher handle for injection into providers
pub type SharedChangeEventDispatcher = Arc<dyn ChangeEventDispatcher>;
