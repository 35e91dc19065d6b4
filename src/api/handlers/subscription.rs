//! Handler for sign-up form validation.

use axum::{Json, extract::State};

use crate::api::dto::catalog::PlanResponse;
use crate::api::dto::subscription::{ValidateRequest, ValidateResponse};
use crate::application::signup::SubmitOutcome;
use crate::state::AppState;

/// Validates sign-up input without storing anything.
///
/// # Endpoint
///
/// `POST /api/subscription/validate`
///
/// # Request Body
///
/// ```json
/// {
///   "full_name": "Jo Park",
///   "email": "jo@example.com",
///   "plan_id": "plan-plus",
///   "consent": true,
///   "touched": ["full_name", "email"],
///   "submit": false
/// }
/// ```
///
/// # Response
///
/// `errors` always holds every failing rule. `visible_errors` holds only
/// those for touched fields (all fields once `submit` is true). `plan` is
/// present when the input is valid.
pub async fn validate_subscription_handler(
    State(state): State<AppState>,
    Json(payload): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let service = &state.subscription_service;
    let mut session = service.restore_session(payload.form, payload.touched);

    if payload.submit
        && let SubmitOutcome::Rejected(errors) = session.submit()
    {
        tracing::debug!(errors = errors.len(), "Sign-up rejected");
    }

    let valid = session.errors().is_empty();
    let plan = if valid {
        state
            .catalog_service
            .plan(&session.form().plan_id)
            .map(PlanResponse::from)
    } else {
        None
    };

    Json(ValidateResponse {
        valid,
        errors: session.errors().clone(),
        visible_errors: session.visible_errors(),
        plan,
    })
}
