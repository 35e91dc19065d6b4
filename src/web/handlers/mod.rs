//! HTML template rendering handlers for the site pages.

mod about;
mod community;
mod error_page;
mod home;
mod products;
mod subscription;
mod theme;

pub use about::about_handler;
pub use community::community_handler;
pub use error_page::{error_page, not_found_handler};
pub use home::home_handler;
pub use products::products_handler;
pub use subscription::{subscribe_handler, subscription_handler};
pub use theme::toggle_theme_handler;
