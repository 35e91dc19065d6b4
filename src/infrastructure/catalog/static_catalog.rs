//! In-memory implementation of [`CatalogRepository`].

use std::collections::HashSet;

use crate::domain::entities::{
    ImpactHighlight, ImpactStat, Panel, PanelSet, Post, Product, SubscriptionPlan,
};
use crate::domain::repositories::CatalogRepository;

use super::seed;

/// Errors detected while assembling the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{id}' has an empty {field}")]
    MissingField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },
}

/// Read-only catalog assembled once at startup.
///
/// Lookups are linear scans; every collection holds a handful of records.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
    posts: Vec<Post>,
    plans: Vec<SubscriptionPlan>,
    impact_stats: Vec<ImpactStat>,
    impact_highlights: Vec<ImpactHighlight>,
    subscription_faq: Vec<Panel>,
    community_faq: Vec<Panel>,
    about_faq: Vec<Panel>,
    about_process: Vec<Panel>,
}

impl StaticCatalog {
    /// Builds the catalog from the authored seed content.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the seed data has duplicate identifiers.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_parts(seed::products(), seed::posts(), seed::plans())
    }

    /// Builds a catalog from explicit collections, keeping the seeded
    /// marketing content.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] when two products, posts (by id
    /// or slug) or plans share an identifier, and
    /// [`CatalogError::MissingField`] for a record without a name or title.
    pub fn from_parts(
        products: Vec<Product>,
        posts: Vec<Post>,
        plans: Vec<SubscriptionPlan>,
    ) -> Result<Self, CatalogError> {
        ensure_unique("product", products.iter().map(|p| p.id.as_str()))?;
        ensure_unique("post", posts.iter().map(|p| p.id.as_str()))?;
        ensure_unique("post slug", posts.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("plan", plans.iter().map(|p| p.id.as_str()))?;

        if let Some(p) = products.iter().find(|p| p.name.trim().is_empty()) {
            return Err(CatalogError::MissingField {
                kind: "product",
                id: p.id.clone(),
                field: "name",
            });
        }
        if let Some(p) = posts.iter().find(|p| p.title.trim().is_empty()) {
            return Err(CatalogError::MissingField {
                kind: "post",
                id: p.id.clone(),
                field: "title",
            });
        }

        Ok(Self {
            products,
            posts,
            plans,
            impact_stats: seed::impact_stats(),
            impact_highlights: seed::impact_highlights(),
            subscription_faq: seed::subscription_faq(),
            community_faq: seed::community_faq(),
            about_faq: seed::about_faq(),
            about_process: seed::about_process(),
        })
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl CatalogRepository for StaticCatalog {
    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn product_by_id(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    fn post_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.iter().find(|p| p.slug == slug).cloned()
    }

    fn plans(&self) -> Vec<SubscriptionPlan> {
        self.plans.clone()
    }

    fn plan_by_id(&self, id: &str) -> Option<SubscriptionPlan> {
        self.plans.iter().find(|p| p.id == id).cloned()
    }

    fn impact_stats(&self) -> Vec<ImpactStat> {
        self.impact_stats.clone()
    }

    fn impact_highlights(&self) -> Vec<ImpactHighlight> {
        self.impact_highlights.clone()
    }

    fn panels(&self, set: PanelSet) -> Vec<Panel> {
        match set {
            PanelSet::SubscriptionFaq => self.subscription_faq.clone(),
            PanelSet::CommunityFaq => self.community_faq.clone(),
            PanelSet::AboutFaq => self.about_faq.clone(),
            PanelSet::AboutProcess => self.about_process.clone(),
        }
    }
}
