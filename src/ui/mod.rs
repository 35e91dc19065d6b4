//! Page interaction state: accordions, modals and the theme preference.
//!
//! These types hold no HTML. The web layer turns them into links and markup.

pub mod accordion;
pub mod modal;
pub mod theme;

pub use accordion::{DisclosureGroup, parse_open_ids};
pub use modal::{Document, Key, KeyOutcome, ModalSession};
pub use theme::{THEME_COOKIE, Theme};
