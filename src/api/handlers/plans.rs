//! Handler for subscription plan listing.

use axum::{Json, extract::State};

use crate::api::dto::catalog::PlanResponse;
use crate::state::AppState;

/// Returns every subscription plan in display order.
///
/// # Endpoint
///
/// `GET /api/plans`
pub async fn plans_handler(State(state): State<AppState>) -> Json<Vec<PlanResponse>> {
    Json(
        state
            .catalog_service
            .plans()
            .into_iter()
            .map(PlanResponse::from)
            .collect(),
    )
}
