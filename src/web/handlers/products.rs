//! Product catalog page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::api::dto::catalog::{ProductQuery, is_checked};
use crate::application::filtering::CategoryFilter;
use crate::domain::entities::ProductCategory;
use crate::state::AppState;
use crate::ui::Theme;
use crate::web::handlers::error_page::error_page;
use crate::web::handlers::home::QuickView;
use crate::web::views::{ModalView, PageMeta, ProductCard, SelectOption, href};

/// Current filter values, echoed back into the filter form.
pub struct FilterForm {
    pub q: String,
    pub categories: Vec<SelectOption>,
    pub in_stock: bool,
    pub min_score: String,
}

/// Template for the catalog page.
///
/// Renders `templates/products.html` with the filter form, the result count,
/// the product grid (or an empty state) and the optional quick view.
#[derive(Template, WebTemplate)]
#[template(path = "products.html")]
pub struct ProductsTemplate {
    pub page: PageMeta,
    pub filters: FilterForm,
    pub active_filters: bool,
    pub products: Vec<ProductCard>,
    pub quick_view: Option<QuickView>,
}

impl ProductsTemplate {
    pub fn result_count(&self) -> String {
        match self.products.len() {
            1 => "1 product".to_string(),
            n => format!("{n} products"),
        }
    }
}

/// Renders the product catalog.
///
/// # Endpoint
///
/// `GET /products?q=&category=&in_stock=&min_score=&view=`
///
/// An unknown category renders a 400 page. An unknown `view` id renders the
/// catalog without a modal.
pub async fn products_handler(
    State(state): State<AppState>,
    theme: Theme,
    Query(query): Query<ProductQuery>,
) -> Response {
    let criteria = match query.to_criteria() {
        Ok(criteria) => criteria,
        Err(err) => return error_page(&state, theme, err),
    };

    let q = query.q.clone().unwrap_or_default();
    let category = match criteria.category {
        CategoryFilter::All => "",
        CategoryFilter::Only(c) => c.id(),
    };
    let in_stock = if is_checked(query.in_stock.as_deref()) {
        "on"
    } else {
        ""
    };
    let min_score = query.min_score.clone().unwrap_or_default();
    let link = |view: &str| {
        href(
            "/products",
            &[
                ("q", q.as_str()),
                ("category", category),
                ("in_stock", in_stock),
                ("min_score", min_score.trim()),
                ("view", view),
            ],
        )
    };

    let catalog = &state.catalog_service;
    let quick_view = query
        .view
        .as_deref()
        .and_then(|id| catalog.product(id))
        .map(|product| QuickView {
            modal: ModalView {
                id: "quick-view",
                title: product.name.clone(),
                close_href: link(""),
            },
            product: ProductCard::new(product, String::new()),
        });

    let products = catalog
        .search_products(&criteria)
        .into_iter()
        .map(|p| {
            let view_href = link(&p.id);
            ProductCard::new(p, view_href)
        })
        .collect();

    let categories = std::iter::once(SelectOption {
        value: "all",
        label: "All",
        selected: criteria.category.is_all(),
    })
    .chain(ProductCategory::ALL.into_iter().map(|c| SelectOption {
        value: c.id(),
        label: c.label(),
        selected: criteria.category == CategoryFilter::Only(c),
    }))
    .collect();

    ProductsTemplate {
        page: PageMeta::new(&state, "Products", "products", theme),
        filters: FilterForm {
            q: q.clone(),
            categories,
            in_stock: criteria.in_stock_only,
            min_score: min_score.trim().to_string(),
        },
        active_filters: criteria.is_active(),
        products,
        quick_view,
    }
    .into_response()
}
