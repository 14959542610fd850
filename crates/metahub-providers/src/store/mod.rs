//! Store backend implementations
//!
//! Backends implement `MetadataStore` and register themselves into the
//! linkme registry so the store resolver can create them by name.

pub mod memory;
pub mod null;

pub use memory::InMemoryMetadataStore;
pub use null::NullMetadataStore;
