//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Query DTOs are shared with the HTML pages.

pub mod catalog;
pub mod health;
pub mod subscription;
