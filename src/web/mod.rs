//! Web layer: the server-rendered pages.
//!
//! Uses Askama templates for server-side rendering. Per-page UI state (filters,
//! open accordion panels, open dialogs) travels in the query string.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`views`] - View models and link builders shared by templates

pub mod handlers;
pub mod routes;
pub mod views;
