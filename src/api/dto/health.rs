//! Response body for `GET /health`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub catalog: CatalogCheck,
}

/// Sizes of the loaded catalog. An empty product list marks the check as
/// failed.
#[derive(Debug, Serialize)]
pub struct CatalogCheck {
    pub status: &'static str,
    pub products: usize,
    pub posts: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CatalogCheck {
    pub fn from_counts(products: usize, posts: usize) -> Self {
        Self {
            status: if products > 0 { "ok" } else { "error" },
            products,
            posts,
            message: Some(format!("{products} products, {posts} posts")),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
