//! View models shared by the page templates.
//!
//! Page state lives in the query string, so most of this module is about
//! building the links that move from one state to the next.

use url::form_urlencoded;

use crate::domain::entities::{Panel, Post, Product, format_money, score_label};
use crate::state::AppState;
use crate::ui::{DisclosureGroup, Theme, parse_open_ids};

/// Primary navigation: path, label and the page key that marks it active.
const NAV: [(&str, &str, &str); 5] = [
    ("/", "Home", "home"),
    ("/products", "Products", "products"),
    ("/subscription", "Subscribe", "subscription"),
    ("/community", "Community", "community"),
    ("/about", "Impact", "about"),
];

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Data every page passes to `base.html`.
pub struct PageMeta {
    pub site_name: String,
    pub title: String,
    pub nav: &'static str,
    pub theme: Theme,
}

impl PageMeta {
    pub fn new(state: &AppState, title: &str, nav: &'static str, theme: Theme) -> Self {
        Self {
            site_name: state.site_name.to_string(),
            title: title.to_string(),
            nav,
            theme,
        }
    }

    /// `<title>` text: the page title followed by the site name.
    pub fn document_title(&self) -> String {
        if self.title.is_empty() {
            self.site_name.clone()
        } else {
            format!("{} | {}", self.title, self.site_name)
        }
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        NAV.iter()
            .map(|&(href, label, key)| NavItem {
                href,
                label,
                active: key == self.nav,
            })
            .collect()
    }

    pub fn theme_toggle_label(&self) -> &'static str {
        if self.theme.is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}

/// Builds `path?k=v&...`, skipping empty values.
pub fn href(path: &str, params: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if !value.is_empty() {
            query.append_pair(key, value);
            any = true;
        }
    }

    if any {
        format!("{path}?{}", query.finish())
    } else {
        path.to_string()
    }
}

/// A dialog rendered with `role="dialog"` and `aria-modal="true"`.
///
/// Closing is a plain link back to the page without the modal parameter.
pub struct ModalView {
    pub id: &'static str,
    pub title: String,
    pub close_href: String,
}

/// One rendered accordion panel.
pub struct PanelView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub open: bool,
    /// Link to the page state with this panel toggled.
    pub toggle_href: String,
}

impl PanelView {
    pub fn button_id(&self) -> String {
        format!("{}-button", self.id)
    }

    pub fn region_id(&self) -> String {
        format!("{}-panel", self.id)
    }
}

pub struct AccordionView {
    pub panels: Vec<PanelView>,
}

impl AccordionView {
    /// Renders `panels` in the state named by the raw `open` parameter.
    ///
    /// `link` receives the comma-joined open ids of a neighbouring state and
    /// returns the URL for it.
    pub fn build(
        panels: Vec<Panel>,
        allow_multiple: bool,
        open: Option<&str>,
        link: impl Fn(&str) -> String,
    ) -> Self {
        let requested = open.map(parse_open_ids).unwrap_or_default();
        let group = DisclosureGroup::new(
            panels.iter().map(|p| p.id.clone()),
            allow_multiple,
            &requested,
        );

        let panels = panels
            .into_iter()
            .map(|panel| {
                let next = group.toggled(&panel.id);
                PanelView {
                    open: group.is_open(&panel.id),
                    toggle_href: link(&next.open_ids().join(",")),
                    id: panel.id,
                    title: panel.title,
                    content: panel.content,
                }
            })
            .collect();

        Self { panels }
    }
}

/// Product card and quick-view content.
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category_label: &'static str,
    pub short_description: String,
    pub description: String,
    pub image: String,
    pub price_label: String,
    pub badges: Vec<String>,
    pub carbon_score: u8,
    pub score_label: &'static str,
    pub rating_label: String,
    pub in_stock: bool,
    pub stock_label: &'static str,
    pub packaging: String,
    pub traits: Vec<&'static str>,
    pub view_href: String,
}

impl ProductCard {
    /// `view_href` is the link that opens this product's quick view.
    pub fn new(product: Product, view_href: String) -> Self {
        let carbon_score = product.carbon_score();
        let rating_label = match product.rating {
            Some(r) => format!("{r:.1} ({} reviews)", product.reviews_count),
            None => "No ratings yet".to_string(),
        };

        let mut traits = Vec::new();
        if let Some(s) = &product.sustainability {
            if s.plastic_free == Some(true) {
                traits.push("Plastic-free");
            }
            if s.vegan == Some(true) {
                traits.push("Vegan");
            }
            if s.palm_oil_free == Some(true) {
                traits.push("Palm-oil free");
            }
        }

        Self {
            category_label: product.category.label(),
            price_label: format_money(product.price, &product.currency),
            score_label: score_label(carbon_score),
            stock_label: product.stock_label(),
            packaging: product.packaging().unwrap_or("").to_string(),
            carbon_score,
            rating_label,
            traits,
            view_href,
            in_stock: product.in_stock,
            id: product.id,
            name: product.name,
            short_description: product.short_description,
            description: product.description,
            image: product.image,
            badges: product.badges,
        }
    }
}

/// Post card and reading-modal content.
pub struct PostCard {
    pub post: Post,
    pub category_label: &'static str,
    pub display_date: String,
    pub read_href: String,
}

impl PostCard {
    pub fn new(post: Post, read_href: String) -> Self {
        Self {
            category_label: post.category.label(),
            display_date: post.display_date(),
            read_href,
            post,
        }
    }
}

/// An option of a `<select>` filter.
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(id: &str) -> Panel {
        Panel {
            id: id.to_string(),
            title: id.to_uppercase(),
            content: String::new(),
        }
    }

    #[test]
    fn test_href_skips_empty_and_encodes() {
        assert_eq!(href("/products", &[]), "/products");
        assert_eq!(href("/products", &[("q", ""), ("view", "")]), "/products");
        assert_eq!(
            href("/community", &[("q", "zero waste"), ("category", "tips")]),
            "/community?q=zero+waste&category=tips"
        );
        assert_eq!(href("/x", &[("q", "a&b")]), "/x?q=a%26b");
    }

    #[test]
    fn test_accordion_links_point_at_toggled_state() {
        let view = AccordionView::build(
            vec![panel("faq-1"), panel("faq-2")],
            false,
            Some("faq-1"),
            |open| href("/about", &[("open", open)]),
        );

        assert!(view.panels[0].open);
        assert!(!view.panels[1].open);
        assert_eq!(view.panels[0].toggle_href, "/about");
        assert_eq!(view.panels[1].toggle_href, "/about?open=faq-2");
    }

    #[test]
    fn test_accordion_multi_select_links_keep_others() {
        let view = AccordionView::build(
            vec![panel("a"), panel("b")],
            true,
            Some("a"),
            |open| href("/about", &[("open", open)]),
        );

        assert_eq!(view.panels[1].toggle_href, "/about?open=a%2Cb");
    }

    #[test]
    fn test_document_title() {
        let page = PageMeta {
            site_name: "Urban Harvest".to_string(),
            title: "Products".to_string(),
            nav: "products",
            theme: Theme::Light,
        };

        assert_eq!(page.document_title(), "Products | Urban Harvest");
        assert_eq!(page.nav_items().iter().filter(|n| n.active).count(), 1);
    }
}
