//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::entities::{ImpactHighlight, ImpactStat};
use crate::state::AppState;
use crate::ui::Theme;
use crate::web::views::{ModalView, PageMeta, PostCard, ProductCard, href};

const HOME_STATS: usize = 4;
const HOME_HIGHLIGHTS: usize = 3;
const HOME_PRODUCTS: usize = 6;

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub view: Option<String>,
}

/// Quick-view dialog for one product.
pub struct QuickView {
    pub modal: ModalView,
    pub product: ProductCard,
}

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - Hero and the first impact figures
/// - "How we work" highlights
/// - Featured products with quick view
/// - The newest community post
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageMeta,
    pub stats: Vec<ImpactStat>,
    pub highlights: Vec<ImpactHighlight>,
    pub products: Vec<ProductCard>,
    pub featured_post: Option<PostCard>,
    pub quick_view: Option<QuickView>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /` with optional `?view=<product-id>`. Unknown ids render no modal.
pub async fn home_handler(
    State(state): State<AppState>,
    theme: Theme,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let catalog = &state.catalog_service;

    let quick_view = query
        .view
        .as_deref()
        .and_then(|id| catalog.product(id))
        .map(|product| QuickView {
            modal: ModalView {
                id: "quick-view",
                title: product.name.clone(),
                close_href: "/".to_string(),
            },
            product: ProductCard::new(product, String::new()),
        });

    let products = catalog
        .featured_products(HOME_PRODUCTS)
        .into_iter()
        .map(|p| {
            let link = href("/", &[("view", p.id.as_str())]);
            ProductCard::new(p, link)
        })
        .collect();

    let featured_post = catalog.featured_post().map(|post| {
        let link = href("/community", &[("post", post.slug.as_str())]);
        PostCard::new(post, link)
    });

    HomeTemplate {
        page: PageMeta::new(&state, "", "home", theme),
        stats: catalog.impact_stats(HOME_STATS),
        highlights: catalog.impact_highlights(HOME_HIGHLIGHTS),
        products,
        featured_post,
        quick_view,
    }
}
