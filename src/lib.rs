//! # Urban Harvest
//!
//! Server-rendered storefront, subscription sign-up and community blog for a
//! sustainable-living shop, built with Axum and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Catalog entities and the repository trait
//! - **Application Layer** ([`application`]) - Filter/sort pipeline, sign-up validation and services
//! - **Infrastructure Layer** ([`infrastructure`]) - The static, validated catalog
//! - **UI State** ([`ui`]) - Accordion, modal focus trap and theme preference
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML pages
//!
//! ## Features
//!
//! - Product search with category, stock and carbon-score filters
//! - Subscription plans with a validated sign-up form (nothing is stored)
//! - Community posts with search, categories and a reading dialog
//! - Light/dark theme stored in a cookie
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # then open http://localhost:3000
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod ui;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::filtering::{CategoryFilter, PostCriteria, ProductCriteria};
    pub use crate::application::services::{CatalogService, SubscriptionService};
    pub use crate::domain::entities::{Post, Product, SubscriptionPlan};
    pub use crate::error::AppError;
    pub use crate::infrastructure::catalog::StaticCatalog;
    pub use crate::state::AppState;
}
