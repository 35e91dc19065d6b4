//! Community post entity.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::product::UnknownCategory;

/// Fixed set of post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostCategory {
    Recipes,
    Guides,
    Tips,
    Stories,
}

impl PostCategory {
    pub const ALL: [PostCategory; 4] = [
        PostCategory::Recipes,
        PostCategory::Guides,
        PostCategory::Tips,
        PostCategory::Stories,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PostCategory::Recipes => "recipes",
            PostCategory::Guides => "guides",
            PostCategory::Tips => "tips",
            PostCategory::Stories => "stories",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostCategory::Recipes => "Recipes",
            PostCategory::Guides => "Guides",
            PostCategory::Tips => "Tips",
            PostCategory::Stories => "Stories",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PostCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Highlighted box shown at the end of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Callout {
    pub title: String,
    pub text: String,
}

/// A community post (recipe, guide, tip or story).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: PostCategory,
    pub date: NaiveDate,
    pub author: String,
    /// Human estimate such as "4 min".
    pub read_time: String,
    pub excerpt: String,
    /// Body, one paragraph or step per line.
    pub content: Vec<String>,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub callout: Option<Callout>,
}

impl Post {
    /// Publication date formatted for display, e.g. "Feb 5, 2026".
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}
