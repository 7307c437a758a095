// Memoizing wrapper for article sources.
//
// Repeated queries for the same company name within one process return
// the cached list without touching the network. A transport failure is
// recovered as an empty list at this boundary and that empty result is
// memoized too — a failed company is not re-contacted within a process,
// and there are no retries.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use super::{Article, ArticleSource};
use crate::cache::BoundedCache;

/// An `ArticleSource` that memoizes fetches by company name.
pub struct CachedSource<S> {
    inner: S,
    cache: BoundedCache<String, Vec<Article>>,
}

impl<S: ArticleSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: BoundedCache::default(),
        }
    }
}

#[async_trait]
impl<S: ArticleSource> ArticleSource for CachedSource<S> {
    async fn fetch(&self, company: &str) -> Result<Vec<Article>> {
        let key = company.to_string();
        if let Some(articles) = self.cache.get(&key) {
            debug!(company = company, "News cache hit");
            return Ok(articles);
        }

        let articles = match self.inner.fetch(company).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(error = %e, company = company, "Failed to fetch news");
                Vec::new()
            }
        };
        self.cache.insert(key, articles.clone());
        Ok(articles)
    }
}
