//! API route configuration.

use crate::api::handlers::{
    plans_handler, posts_handler, products_handler, validate_subscription_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only JSON API, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /products`              - Filtered, sorted products
/// - `GET  /posts`                 - Filtered posts, newest first
/// - `GET  /plans`                 - Subscription plans
/// - `POST /subscription/validate` - Sign-up form validation
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products_handler))
        .route("/posts", get(posts_handler))
        .route("/plans", get(plans_handler))
        .route("/subscription/validate", post(validate_subscription_handler))
}
