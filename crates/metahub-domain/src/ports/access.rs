//! Metadata store and access ports
//!
//! [`MetadataStore`] is the repository backend: a namespaced JSON-document
//! store. Backends register themselves by name (see
//! [`crate::ports::registry`]) and are selected through configuration.
//!
//! [`MetadataAccess`] is the gatekeeper every provider goes through. The
//! store handle it yields is unavailable until the one-time structural
//! configuration has completed, which is how configure-before-use is
//! enforced without a container lifecycle callback.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Namespaced JSON-document store backing the metadata repository
///
/// Documents live in named spaces. Writing to a space that has not been
/// created is an error; the repository configurator creates every space
/// the providers use before any of them runs.
#[async_trait]
pub trait MetadataStore: Send + Sync + std::fmt::Debug {
    /// Create a document space; creating an existing space is a no-op
    async fn create_space(&self, space: &str) -> Result<()>;

    /// Names of all existing spaces
    async fn spaces(&self) -> Result<Vec<String>>;

    /// Insert or replace a document
    async fn put(&self, space: &str, key: &str, doc: Value) -> Result<()>;

    /// Fetch a document by key
    async fn get(&self, space: &str, key: &str) -> Result<Option<Value>>;

    /// Remove a document; returns whether it existed
    async fn remove(&self, space: &str, key: &str) -> Result<bool>;

    /// All documents in a space
    async fn list(&self, space: &str) -> Result<Vec<Value>>;

    /// Drop all documents from all spaces, keeping the spaces themselves
    async fn clear(&self) -> Result<()>;

    /// Name of this backend implementation (e.g. "memory", "null")
    fn store_name(&self) -> &str;
}

/// Gatekeeper for repository access
///
/// Exactly one instance exists per registry lifecycle. Providers hold it
/// shared and obtain the store handle per call so that premature use fails
/// fast instead of observing a half-configured repository.
pub trait MetadataAccess: Send + Sync + std::fmt::Debug {
    /// Handle to the underlying store
    ///
    /// Fails with [`crate::Error::NotConfigured`] until the repository
    /// configurator has completed.
    fn store(&self) -> Result<Arc<dyn MetadataStore>>;

    /// Whether one-time structural configuration has completed
    fn is_configured(&self) -> bool;

    /// Record that structural configuration has completed
    ///
    /// Called by the repository configurator only, exactly once per
    /// lifecycle. Subsequent calls are harmless.
    fn mark_configured(&self);
}
