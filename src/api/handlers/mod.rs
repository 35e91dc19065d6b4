//! HTTP request handlers for API endpoints.
//!
//! Handlers are thin: they turn query strings and bodies into criteria or
//! forms, call the services in [`crate::application::services`] and map the
//! result to DTOs.

mod health;
mod plans;
mod posts;
mod products;
mod subscription;

pub use health::health_handler;
pub use plans::plans_handler;
pub use posts::posts_handler;
pub use products::products_handler;
pub use subscription::validate_subscription_handler;
