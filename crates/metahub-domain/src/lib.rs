//! # Metahub Domain
//!
//! Domain layer for the Metahub metadata registry. This crate defines the
//! metadata entity types, the port traits each provider capability
//! implements, the change-event contract, and the store-backend
//! registration slice.
//!
//! ## Layout
//!
//! - [`entity`] - metadata entities and typed identifiers
//! - [`events`] - change events and the dispatcher port
//! - [`ports`] - provider port traits and the store registry
//! - [`error`] - crate-wide error and result types
//!
//! Concrete provider implementations live in `metahub-providers`; the
//! composition roots that wire them live in `metahub-registry`.

pub mod entity;
pub mod error;
pub mod events;
pub mod ports;

pub use error::{Error, Result};
