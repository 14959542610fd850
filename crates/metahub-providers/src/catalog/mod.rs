//! Catalog providers
//!
//! Store-backed implementations of the catalog subdomain ports:
//! connectors, data sources, and data sets.

pub mod connector;
pub mod data_set;
pub mod data_source;

pub use connector::StoreConnectorProvider;
pub use data_set::StoreDataSetProvider;
pub use data_source::StoreDataSourceProvider;
