//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for content access; the seeded in-memory
//! implementation lives in `crate::infrastructure::catalog`. Mock
//! implementations are generated via `mockall` for service tests.

pub mod catalog_repository;

pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
