// News retrieval — the article fetcher and its memoizing wrapper.

pub mod cache;
pub mod client;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Placeholder when a provider result has no title field.
pub const NO_TITLE: &str = "No title";
/// Placeholder when a provider result has no description field.
pub const NO_SUMMARY: &str = "No summary";

/// How many articles the pipeline analyzes, regardless of how many
/// the provider returns.
pub const MAX_ANALYZED_ARTICLES: usize = 2;

/// A fetched news article. Immutable once built; discarded after the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
}

/// Trait for fetching recent articles about a company. The pipeline and
/// the tests go through this seam; `NewsApiClient` is the real backend.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch recent articles for the given company name.
    async fn fetch(&self, company: &str) -> Result<Vec<Article>>;
}
