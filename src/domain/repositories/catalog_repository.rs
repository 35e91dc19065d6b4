//! Repository trait for read-only catalog access.

use crate::domain::entities::{
    ImpactHighlight, ImpactStat, Panel, PanelSet, Post, Product, SubscriptionPlan,
};

/// Read-only access to the site's static content.
///
/// Collections are returned in their authored order; the filter pipeline
/// relies on that order for stable tie-breaking.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::StaticCatalog`] - In-memory seeded catalog
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// All products in catalog order.
    fn products(&self) -> Vec<Product>;

    /// Finds a product by id.
    fn product_by_id(&self, id: &str) -> Option<Product>;

    /// All posts in authored order.
    fn posts(&self) -> Vec<Post>;

    /// Finds a post by its URL slug.
    fn post_by_slug(&self, slug: &str) -> Option<Post>;

    /// All subscription plans in display order.
    fn plans(&self) -> Vec<SubscriptionPlan>;

    /// Finds a plan by id.
    ///
    /// The sign-up form uses this to check that `plan_id` references an
    /// existing plan.
    fn plan_by_id(&self, id: &str) -> Option<SubscriptionPlan>;

    fn impact_stats(&self) -> Vec<ImpactStat>;

    fn impact_highlights(&self) -> Vec<ImpactHighlight>;

    /// Accordion panels for one of the pages.
    fn panels(&self, set: PanelSet) -> Vec<Panel>;
}
