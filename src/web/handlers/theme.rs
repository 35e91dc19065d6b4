//! Theme toggle handler.

use axum::{
    http::{
        HeaderMap, StatusCode,
        header::{HOST, LOCATION, REFERER, SET_COOKIE},
    },
    response::IntoResponse,
};
use url::Url;

use crate::ui::Theme;

/// Flips the theme cookie and sends the visitor back where they came from.
///
/// # Endpoint
///
/// `POST /theme`
///
/// Redirects (303) to the path of the `Referer` header when it is a local
/// path or a URL on this host, otherwise to `/`.
pub async fn toggle_theme_handler(theme: Theme, headers: HeaderMap) -> impl IntoResponse {
    let next = theme.toggle();
    let location = return_path(&headers);
    tracing::debug!(theme = %next, location = %location, "Theme toggled");

    (
        StatusCode::SEE_OTHER,
        [(SET_COOKIE, next.set_cookie()), (LOCATION, location)],
    )
}

/// Same-origin path taken from `Referer`, or `/`.
fn return_path(headers: &HeaderMap) -> String {
    referer_path(headers)
        .filter(|p| p.starts_with('/') && !p.starts_with("//"))
        .unwrap_or_else(|| "/".to_string())
}

/// Path and query of the referring page when it is on this host.
fn referer_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(REFERER)?.to_str().ok()?;
    if referer.starts_with('/') {
        return Some(referer.to_string());
    }

    let url = Url::parse(referer).ok()?;
    let host = headers.get(HOST)?.to_str().ok()?;
    let origin = match url.port() {
        Some(port) => format!("{}:{port}", url.host_str()?),
        None => url.host_str()?.to_string(),
    };
    if origin != host {
        return None;
    }

    Some(match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    })
}
