//! Query parameters and response bodies for catalog browsing.
//!
//! The query structs are shared with the HTML pages, which accept the same
//! parameters as the JSON endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::application::filtering::{PostCriteria, ProductCriteria, coerce_min_score};
use crate::domain::entities::{Post, Product, SubscriptionPlan, format_money, score_label};
use crate::error::{AppError, parse_param};

/// True for the values an HTML checkbox or a JSON client may send.
pub fn is_checked(raw: Option<&str>) -> bool {
    matches!(
        raw.map(str::trim),
        Some("on") | Some("true") | Some("1") | Some("yes")
    )
}

/// Product filters as they arrive in the query string.
///
/// Empty values are treated as absent so that an untouched filter form
/// submits the same criteria as a bare `/products`.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 200, message = "Search text is too long"))]
    pub q: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,

    /// Checkbox value; anything but a checked value means "show all".
    #[serde(default)]
    pub in_stock: Option<String>,

    /// Raw minimum carbon score, coerced rather than rejected.
    #[serde(default)]
    pub min_score: Option<String>,

    /// Product id for the quick-view modal.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub view: Option<String>,
}

impl ProductQuery {
    /// Validates the raw input and builds the filter criteria.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an overlong query or an unknown
    /// category id.
    pub fn to_criteria(&self) -> Result<ProductCriteria, AppError> {
        self.validate()?;

        Ok(ProductCriteria {
            query: self.q.clone().unwrap_or_default(),
            category: parse_param("category", self.category.as_deref())?,
            in_stock_only: is_checked(self.in_stock.as_deref()),
            min_score: self.min_score.as_deref().map_or(0.0, coerce_min_score),
        })
    }
}

/// Post filters as they arrive in the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PostQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 200, message = "Search text is too long"))]
    pub q: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,

    /// Post slug for the reading modal.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub post: Option<String>,

    /// Open FAQ panels, comma separated.
    #[serde(default)]
    pub open: Option<String>,
}

impl PostQuery {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an overlong query or an unknown
    /// category id.
    pub fn to_criteria(&self) -> Result<PostCriteria, AppError> {
        self.validate()?;

        Ok(PostCriteria {
            query: self.q.clone().unwrap_or_default(),
            category: parse_param("category", self.category.as_deref())?,
        })
    }
}

/// A product with its derived display values.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub category_label: &'static str,
    pub price_label: String,
    pub carbon_score: u8,
    pub score_label: &'static str,
    pub stock_label: &'static str,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let carbon_score = product.carbon_score();
        Self {
            category_label: product.category.label(),
            price_label: format_money(product.price, &product.currency),
            carbon_score,
            score_label: score_label(carbon_score),
            stock_label: product.stock_label(),
            product,
        }
    }
}

/// A post with its category label and formatted date.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    #[serde(flatten)]
    pub post: Post,
    pub category_label: &'static str,
    pub display_date: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            category_label: post.category.label(),
            display_date: post.display_date(),
            post,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: SubscriptionPlan,
    pub price_label: String,
    pub price_with_period: String,
}

impl From<SubscriptionPlan> for PlanResponse {
    fn from(plan: SubscriptionPlan) -> Self {
        Self {
            price_label: plan.price_label(),
            price_with_period: plan.price_with_period(),
            plan,
        }
    }
}

/// Result of a filter/sort run.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub active_filters: bool,
    pub items: Vec<T>,
}
