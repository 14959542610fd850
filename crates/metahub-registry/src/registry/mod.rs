//! Provider registries
//!
//! Two composition roots: [`MetadataRegistry`] for the metadata domain and
//! [`CatalogRegistry`] for the catalog subdomain. Each guarantees exactly
//! one instance per capability per lifecycle, constructed eagerly at
//! start-up.

pub mod catalog;
pub mod metadata;

pub use catalog::{CatalogRegistry, init_catalog};
pub use metadata::{MetadataRegistry, init_metadata, init_test_registry};
