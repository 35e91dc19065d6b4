//! Handler for product search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::catalog::{ListResponse, ProductQuery, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Runs the filter/sort pipeline over the product catalog.
///
/// # Endpoint
///
/// `GET /api/products`
///
/// # Query Parameters
///
/// - `q` - Case-insensitive free text
/// - `category` - `all` or a category id (`refills`, `kitchen`, ...)
/// - `in_stock` - `on`/`true` to hide unavailable products
/// - `min_score` - Minimum carbon score; unparseable values count as 0
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown category or an overlong query.
pub async fn products_handler(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ListResponse<ProductResponse>>, AppError> {
    let criteria = query.to_criteria()?;
    let items: Vec<ProductResponse> = state
        .catalog_service
        .search_products(&criteria)
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    Ok(Json(ListResponse {
        total: items.len(),
        active_filters: criteria.is_active(),
        items,
    }))
}
