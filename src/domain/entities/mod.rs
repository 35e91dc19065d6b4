//! Core domain entities representing the static site content.
//!
//! Entities are plain data structures created once at startup from the seeded
//! catalog and never mutated afterwards.
//!
//! # Entity Types
//!
//! - [`Product`] - A catalog product with optional [`Sustainability`] attributes
//! - [`Post`] - A community post
//! - [`SubscriptionPlan`] - A subscription tier
//! - [`ImpactStat`], [`ImpactHighlight`] - Marketing figures
//! - [`Panel`] - FAQ entries and process steps rendered as accordion panels

pub mod impact;
pub mod plan;
pub mod post;
pub mod product;

pub use impact::{ImpactHighlight, ImpactStat, Panel, PanelSet};
pub use plan::SubscriptionPlan;
pub use post::{Callout, Post, PostCategory};
pub use product::{
    Product, ProductCategory, Sustainability, UnknownCategory, format_money, score_label,
};
