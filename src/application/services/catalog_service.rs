//! Catalog browsing service.

use std::sync::Arc;

use crate::application::filtering::{PostCriteria, ProductCriteria, filter_posts, filter_products};
use crate::domain::entities::{
    ImpactHighlight, ImpactStat, Panel, PanelSet, Post, Product, SubscriptionPlan,
};
use crate::domain::repositories::CatalogRepository;

/// Service for browsing products, posts and marketing content.
///
/// Runs the filter/sort pipeline against the repository's collections and
/// answers the lookups each page needs.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Products matching `criteria`, in display order.
    pub fn search_products(&self, criteria: &ProductCriteria) -> Vec<Product> {
        let products = self.repository.products();
        let result: Vec<Product> = filter_products(&products, criteria)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            query = %criteria.query,
            total = products.len(),
            matched = result.len(),
            "Filtered products"
        );

        result
    }

    /// Posts matching `criteria`, newest first.
    pub fn search_posts(&self, criteria: &PostCriteria) -> Vec<Post> {
        let posts = self.repository.posts();
        let result: Vec<Post> = filter_posts(&posts, criteria)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            query = %criteria.query,
            total = posts.len(),
            matched = result.len(),
            "Filtered posts"
        );

        result
    }

    /// Up to `limit` featured products in catalog order.
    pub fn featured_products(&self, limit: usize) -> Vec<Product> {
        self.repository
            .products()
            .into_iter()
            .filter(|p| p.featured)
            .take(limit)
            .collect()
    }

    /// The newest post; on equal dates the first authored post wins.
    pub fn featured_post(&self) -> Option<Post> {
        filter_posts(&self.repository.posts(), &PostCriteria::default())
            .first()
            .map(|p| (*p).clone())
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.repository.product_by_id(id)
    }

    pub fn post(&self, slug: &str) -> Option<Post> {
        self.repository.post_by_slug(slug)
    }

    pub fn plans(&self) -> Vec<SubscriptionPlan> {
        self.repository.plans()
    }

    pub fn plan(&self, id: &str) -> Option<SubscriptionPlan> {
        self.repository.plan_by_id(id)
    }

    /// The first `limit` impact figures.
    pub fn impact_stats(&self, limit: usize) -> Vec<ImpactStat> {
        self.repository
            .impact_stats()
            .into_iter()
            .take(limit)
            .collect()
    }

    pub fn impact_highlights(&self, limit: usize) -> Vec<ImpactHighlight> {
        self.repository
            .impact_highlights()
            .into_iter()
            .take(limit)
            .collect()
    }

    pub fn panels(&self, set: PanelSet) -> Vec<Panel> {
        self.repository.panels(set)
    }

    /// Number of products and posts, reported by the health check.
    pub fn counts(&self) -> (usize, usize) {
        (
            self.repository.products().len(),
            self.repository.posts().len(),
        )
    }
}
