//! Application configuration
//!
//! Configuration types and the figment-based loader. Sources are merged
//! in order: defaults, then a TOML file, then prefixed environment
//! variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, EventSettings, LoggingConfig, StoreSettings};
