// NewsAPI client — unauthenticated HTTP search over recent coverage.
//
// A thin reqwest wrapper in the same shape as the other service clients:
// one GET helper, serde response types, errors carrying status and body.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{Article, ArticleSource, MAX_ANALYZED_ARTICLES, NO_SUMMARY, NO_TITLE};

/// Default news search endpoint (NewsAPI "everything" search).
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2/everything";

/// HTTP client for a NewsAPI-compatible search endpoint.
pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    /// Create a new client against the given endpoint.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("khabar/0.1 (news-briefings)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl ArticleSource for NewsApiClient {
    async fn fetch(&self, company: &str) -> Result<Vec<Article>> {
        debug!(company = company, "News search request");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", company), ("apiKey", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("News request failed for \"{company}\""))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("News endpoint returned {status}: {body}");
        }

        let body: NewsResponse = response
            .json()
            .await
            .context("Failed to parse news search response")?;

        Ok(collect_articles(body))
    }
}

/// Keep the first two results, defaulting missing fields to the
/// "No title" / "No summary" placeholders.
fn collect_articles(body: NewsResponse) -> Vec<Article> {
    body.articles
        .into_iter()
        .take(MAX_ANALYZED_ARTICLES)
        .map(|raw| Article {
            title: raw.title.unwrap_or_else(|| NO_TITLE.to_string()),
            summary: raw.description.unwrap_or_else(|| NO_SUMMARY.to_string()),
        })
        .collect()
}

// -- Serde types for the news search response --

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
}
