//! Business logic services for the application layer.

pub mod catalog_service;
pub mod subscription_service;

pub use catalog_service::CatalogService;
pub use subscription_service::SubscriptionService;
