//! Light/dark theme preference stored in a cookie.

use std::convert::Infallible;
use std::fmt;

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts},
};

/// Cookie holding the preference.
pub const THEME_COOKIE: &str = "theme";

/// One year, in seconds.
const COOKIE_MAX_AGE: u64 = 31_536_000;

/// Site color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses a stored value. Anything other than `dark` is light.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Value for the `theme-color` meta tag.
    pub fn theme_color(&self) -> &'static str {
        match self {
            Theme::Light => "#fafafa",
            Theme::Dark => "#0f172a",
        }
    }

    /// `Set-Cookie` value persisting this theme.
    pub fn set_cookie(&self) -> String {
        format!(
            "{THEME_COOKIE}={}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax",
            self.as_str()
        )
    }

    /// Reads the preference from a raw `Cookie` header value.
    pub fn from_cookie_header(header: &str) -> Self {
        header
            .split(';')
            .find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(THEME_COOKIE), Some(value)) => Some(Theme::parse(value)),
                    _ => None,
                }
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Theme {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(COOKIE)
            .and_then(|header| header.to_str().ok())
            .map(Theme::from_cookie_header)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_falls_back_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("sepia"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_color() {
        assert_eq!(Theme::Dark.theme_color(), "#0f172a");
        assert_eq!(Theme::Light.theme_color(), "#fafafa");
    }

    #[test]
    fn test_set_cookie_attributes() {
        assert_eq!(
            Theme::Dark.set_cookie(),
            "theme=dark; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn test_from_cookie_header_among_others() {
        assert_eq!(
            Theme::from_cookie_header("session=abc; theme=dark; other=1"),
            Theme::Dark
        );
        assert_eq!(Theme::from_cookie_header("session=abc"), Theme::Light);
        assert_eq!(Theme::from_cookie_header("theme=neon"), Theme::Light);
    }
}
