//! Domain layer containing content entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Products, posts, plans and marketing content
//! - [`repositories`] - Read-only catalog access trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Filtering, sorting and validation rules live in
//!   [`crate::application::services`]

pub mod entities;
pub mod repositories;
