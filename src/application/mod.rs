//! Application layer implementing the site's rules.
//!
//! This layer holds the pure rule sets and the services that apply them to
//! repository data. Handlers in [`crate::api`] and [`crate::web`] only call
//! into services.
//!
//! # Modules
//!
//! - [`filtering`] - Filter/sort pipeline for products and posts
//! - [`signup`] - Sign-up form validation and session state
//! - [`services::catalog_service::CatalogService`] - Catalog browsing
//! - [`services::subscription_service::SubscriptionService`] - Plan picking and sign-up

pub mod filtering;
pub mod services;
pub mod signup;
