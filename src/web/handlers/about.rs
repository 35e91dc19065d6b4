//! About (impact) page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::domain::entities::{ImpactHighlight, ImpactStat, PanelSet};
use crate::state::AppState;
use crate::ui::Theme;
use crate::web::views::{AccordionView, PageMeta, href};

#[derive(Debug, Default, Deserialize)]
pub struct AboutQuery {
    /// Open FAQ panels, comma separated.
    #[serde(default)]
    pub open: Option<String>,
    /// Open process steps, comma separated.
    #[serde(default)]
    pub steps: Option<String>,
}

/// Template for the about page.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: PageMeta,
    pub stats: Vec<ImpactStat>,
    pub highlights: Vec<ImpactHighlight>,
    pub process: AccordionView,
    pub faq: AccordionView,
}

/// Renders the about page.
///
/// # Endpoint
///
/// `GET /about?open=<faq ids>&steps=<process step ids>`
///
/// The FAQ is single-select; process steps may be expanded together.
pub async fn about_handler(
    State(state): State<AppState>,
    theme: Theme,
    Query(query): Query<AboutQuery>,
) -> impl IntoResponse {
    let catalog = &state.catalog_service;
    let open = query.open.as_deref().unwrap_or("");
    let steps = query.steps.as_deref().unwrap_or("");

    let process = AccordionView::build(
        catalog.panels(PanelSet::AboutProcess),
        true,
        query.steps.as_deref(),
        |next| {
            format!(
                "{}#process",
                href("/about", &[("open", open), ("steps", next)])
            )
        },
    );

    let faq = AccordionView::build(
        catalog.panels(PanelSet::AboutFaq),
        false,
        query.open.as_deref(),
        |next| format!("{}#faq", href("/about", &[("open", next), ("steps", steps)])),
    );

    AboutTemplate {
        page: PageMeta::new(&state, "About", "about", theme),
        stats: catalog.impact_stats(usize::MAX),
        highlights: catalog.impact_highlights(usize::MAX),
        process,
        faq,
    }
}
