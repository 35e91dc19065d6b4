//! Community page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::api::dto::catalog::PostQuery;
use crate::application::filtering::CategoryFilter;
use crate::domain::entities::{PanelSet, PostCategory};
use crate::state::AppState;
use crate::ui::Theme;
use crate::web::handlers::error_page::error_page;
use crate::web::views::{AccordionView, ModalView, PageMeta, PostCard, SelectOption, href};

/// Category chip linking to the filtered list.
pub struct CategoryChip {
    pub option: SelectOption,
    pub href: String,
}

/// Reading dialog for one post.
pub struct ReadingView {
    pub modal: ModalView,
    pub post: PostCard,
}

/// Template for the community page.
///
/// Renders `templates/community.html` with search, category chips, the
/// featured post, the post list, the FAQ accordion and the reading dialog.
#[derive(Template, WebTemplate)]
#[template(path = "community.html")]
pub struct CommunityTemplate {
    pub page: PageMeta,
    pub q: String,
    pub category: &'static str,
    pub chips: Vec<CategoryChip>,
    pub featured: Option<PostCard>,
    pub posts: Vec<PostCard>,
    pub active_filters: bool,
    pub faq: AccordionView,
    pub reading: Option<ReadingView>,
}

impl CommunityTemplate {
    pub fn result_count(&self) -> String {
        match self.posts.len() {
            1 => "1 result".to_string(),
            n => format!("{n} results"),
        }
    }
}

/// Renders the community page.
///
/// # Endpoint
///
/// `GET /community?q=&category=&post=<slug>&open=<faq ids>`
///
/// An unknown category renders a 400 page. An unknown slug renders the page
/// without a dialog.
pub async fn community_handler(
    State(state): State<AppState>,
    theme: Theme,
    Query(query): Query<PostQuery>,
) -> Response {
    let criteria = match query.to_criteria() {
        Ok(criteria) => criteria,
        Err(err) => return error_page(&state, theme, err),
    };

    let q = query.q.clone().unwrap_or_default();
    let category = match criteria.category {
        CategoryFilter::All => "",
        CategoryFilter::Only(c) => c.id(),
    };
    let open = query.open.as_deref().unwrap_or("");
    let link = |category: &str, post: &str, open: &str| {
        href(
            "/community",
            &[
                ("q", q.as_str()),
                ("category", category),
                ("post", post),
                ("open", open),
            ],
        )
    };

    let catalog = &state.catalog_service;

    let reading = query
        .post
        .as_deref()
        .and_then(|slug| catalog.post(slug))
        .map(|post| ReadingView {
            modal: ModalView {
                id: "reading",
                title: post.title.clone(),
                close_href: link(category, "", open),
            },
            post: PostCard::new(post, String::new()),
        });

    let featured = catalog.featured_post().map(|post| {
        let read_href = link(category, &post.slug, open);
        PostCard::new(post, read_href)
    });

    let posts = catalog
        .search_posts(&criteria)
        .into_iter()
        .map(|post| {
            let read_href = link(category, &post.slug, open);
            PostCard::new(post, read_href)
        })
        .collect();

    let chips = std::iter::once(("all", "All", criteria.category.is_all()))
        .chain(PostCategory::ALL.into_iter().map(|c| {
            (c.id(), c.label(), criteria.category == CategoryFilter::Only(c))
        }))
        .map(|(value, label, selected)| CategoryChip {
            href: link(if value == "all" { "" } else { value }, "", open),
            option: SelectOption {
                value,
                label,
                selected,
            },
        })
        .collect();

    let faq = AccordionView::build(
        catalog.panels(PanelSet::CommunityFaq),
        false,
        query.open.as_deref(),
        |next| format!("{}#faq", link(category, "", next)),
    );

    CommunityTemplate {
        page: PageMeta::new(&state, "Community", "community", theme),
        q: q.clone(),
        category,
        chips,
        featured,
        posts,
        active_filters: criteria.is_active(),
        faq,
        reading,
    }
    .into_response()
}
