//! Handler for community post search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::catalog::{ListResponse, PostQuery, PostResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists community posts matching `q` and `category`, newest first.
///
/// # Endpoint
///
/// `GET /api/posts`
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown category or an overlong query.
pub async fn posts_handler(
    State(state): State<AppState>,
    Query(query): Query<PostQuery>,
) -> Result<Json<ListResponse<PostResponse>>, AppError> {
    let criteria = query.to_criteria()?;
    let items: Vec<PostResponse> = state
        .catalog_service
        .search_posts(&criteria)
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(Json(ListResponse {
        total: items.len(),
        active_filters: criteria.is_active(),
        items,
    }))
}
