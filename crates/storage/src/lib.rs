//! Storage layer for the climate services.
//!
//! Provides read-only access to the SQLite climate dataset:
//! - Static declaration of the `station` and `measurement` tables
//! - Startup verification of that schema against the live database
//! - The aggregate queries served by the API

pub mod catalog;
pub mod schema;

pub use catalog::{Catalog, CatalogOptions, DatasetSummary};
pub use schema::{ColumnSpec, TableSchema, MEASUREMENT, STATION, TABLES};
