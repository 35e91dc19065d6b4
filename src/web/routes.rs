//! Site page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, community_handler, home_handler, products_handler, subscribe_handler,
    subscription_handler, toggle_theme_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET  /`             - Home with featured products and the newest post
/// - `GET  /products`     - Filterable catalog
/// - `GET  /subscription` - Plans, sign-up form and FAQ
/// - `POST /subscription` - Sign-up form submission
/// - `GET  /community`    - Posts, search and FAQ
/// - `GET  /about`        - Impact figures, process and FAQ
/// - `POST /theme`        - Toggle light/dark theme
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/products", get(products_handler))
        .route(
            "/subscription",
            get(subscription_handler).post(subscribe_handler),
        )
        .route("/community", get(community_handler))
        .route("/about", get(about_handler))
        .route("/theme", post(toggle_theme_handler))
}
