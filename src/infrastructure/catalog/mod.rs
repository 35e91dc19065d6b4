//! Seeded, in-memory content store.

mod seed;
mod static_catalog;

pub use static_catalog::{CatalogError, StaticCatalog};
