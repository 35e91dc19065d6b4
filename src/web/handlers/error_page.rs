//! Error and fallback pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::ui::Theme;
use crate::web::views::PageMeta;

/// Template for error pages (unknown routes, rejected filters).
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub page: PageMeta,
    pub status: u16,
    pub heading: String,
    pub message: String,
}

/// Renders the 404 page for any unmatched route.
pub async fn not_found_handler(State(state): State<AppState>, theme: Theme) -> Response {
    let template = ErrorTemplate {
        page: PageMeta::new(&state, "Page not found", "", theme),
        status: 404,
        heading: "This page doesn't exist.".to_string(),
        message: "The link might be broken, or the page may have been moved. \
                  Use the buttons below to get back on track."
            .to_string(),
    };

    (StatusCode::NOT_FOUND, template).into_response()
}

/// Renders `err` as an HTML page carrying the error's status code.
pub fn error_page(state: &AppState, theme: Theme, err: AppError) -> Response {
    let status = err.status();
    tracing::debug!(status = %status, error = %err, "Rendering error page");

    let template = ErrorTemplate {
        page: PageMeta::new(state, "Something went wrong", "", theme),
        status: status.as_u16(),
        heading: if status == StatusCode::BAD_REQUEST {
            "That filter doesn't look right.".to_string()
        } else {
            "Something went wrong.".to_string()
        },
        message: err.to_error_info().message,
    };

    (status, template).into_response()
}
