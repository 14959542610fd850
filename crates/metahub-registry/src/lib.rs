//! # Metahub Registry
//!
//! Composition roots for the Metahub metadata system. This crate replaces
//! a reflective bean container with explicit, language-native dependency
//! construction: each registry is built by one start-up function that
//! creates every provider singleton in topological order and passes
//! references explicitly.
//!
//! ## Start-up flow
//!
//! ```text
//! AppConfig → StoreResolver → MetadataStore (linkme registry)
//!                                   │
//!                                   ▼
//!                        StoreMetadataAccess (unconfigured)
//!                                   │
//!                                   ▼
//!                    RepositoryConfigurator::configure()
//!                                   │
//!                                   ▼
//!              providers, utilities → MetadataRegistry
//! ```
//!
//! The configurator completes before any provider is handed out; an access
//! handle used earlier fails fast with a not-configured error.

pub mod config;
pub mod configurator;
pub mod constants;
pub mod logging;
pub mod registry;
pub mod resolver;

pub use config::{AppConfig, ConfigLoader, EventSettings, LoggingConfig, StoreSettings};
pub use configurator::RepositoryConfigurator;
pub use logging::init_logging;
pub use registry::{
    CatalogRegistry, MetadataRegistry, init_catalog, init_metadata, init_test_registry,
};
pub use resolver::StoreResolver;
