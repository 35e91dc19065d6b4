//! Impact figures and FAQ-style content blocks for the marketing pages.

use serde::Serialize;

/// A headline sustainability figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactStat {
    pub id: String,
    pub label: String,
    pub value: u64,
    pub unit: String,
    pub note: String,
}

/// A short "how we work" highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactHighlight {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// A titled block of text rendered as one accordion panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Named groups of [`Panel`]s shown on the different pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSet {
    SubscriptionFaq,
    CommunityFaq,
    AboutFaq,
    AboutProcess,
}
