//! Shared application state.

use std::sync::Arc;

use crate::application::services::{CatalogService, SubscriptionService};
use crate::infrastructure::catalog::{CatalogError, StaticCatalog};

/// State handed to every handler. Cheap to clone: services sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<StaticCatalog>>,
    pub subscription_service: Arc<SubscriptionService<StaticCatalog>>,
    pub site_name: Arc<str>,
}

impl AppState {
    /// Wires both services to one shared catalog.
    pub fn new(catalog: Arc<StaticCatalog>, site_name: &str) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(catalog.clone())),
            subscription_service: Arc::new(SubscriptionService::new(catalog)),
            site_name: Arc::from(site_name),
        }
    }

    /// State backed by the built-in catalog.
    pub fn seeded(site_name: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(Arc::new(StaticCatalog::seeded()?), site_name))
    }
}
