//! Infrastructure layer implementing the domain repository contracts.
//!
//! # Modules
//!
//! - [`catalog`] - Static, seeded [`crate::domain::repositories::CatalogRepository`]

pub mod catalog;
