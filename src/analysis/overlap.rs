// Topic overlap across articles — set intersection and difference over
// extracted topic phrases.
//
// Each article's topic phrase comes from the summarizer and is split on
// the literal ", " separator. That split is a heuristic: a phrase that
// itself contains a comma-space will be cut at it. The behavior is kept
// as-is rather than guessed around.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::news::Article;
use crate::nlp::{self, traits::Summarizer};

/// The topics one article does not share with the rest.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleTopics {
    /// Display key, "Article 1", "Article 2", ... in input order.
    pub label: String,
    pub topics: BTreeSet<String>,
}

/// Common and per-article unique topic sets.
///
/// `common` is the intersection over every article's topic set; each
/// `unique` set is that article's set minus `common`, so the two are
/// disjoint by construction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopicOverlap {
    pub common: BTreeSet<String>,
    pub unique: Vec<ArticleTopics>,
}

impl TopicOverlap {
    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.unique.is_empty()
    }
}

/// Split an extracted topic phrase into its topic set.
pub fn split_topics(phrase: &str) -> BTreeSet<String> {
    phrase.split(", ").map(str::to_string).collect()
}

/// Extract topics per article and compute the common/unique breakdown.
/// Fewer than two articles is reported and yields an empty result.
pub async fn analyze_topic_overlap(
    articles: &[Article],
    summarizer: &dyn Summarizer,
) -> TopicOverlap {
    if articles.len() < 2 {
        warn!(
            count = articles.len(),
            "At least 2 articles are required for topic overlap analysis"
        );
        return TopicOverlap::default();
    }

    let mut topic_sets = Vec::with_capacity(articles.len());
    for (i, article) in articles.iter().enumerate() {
        let phrase = nlp::extract_topics(summarizer, &article.summary).await;
        topic_sets.push((format!("Article {}", i + 1), split_topics(&phrase)));
    }

    let common = topic_sets
        .iter()
        .skip(1)
        .fold(topic_sets[0].1.clone(), |acc, (_, set)| {
            acc.intersection(set).cloned().collect()
        });

    let unique = topic_sets
        .into_iter()
        .map(|(label, set)| ArticleTopics {
            label,
            topics: set.difference(&common).cloned().collect(),
        })
        .collect();

    TopicOverlap { common, unique }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use async_trait::async_trait;

    use super::*;

    /// Summarizer that echoes the input back — topic sets mirror the
    /// article summaries exactly.
    struct EchoSummarizer;

    #[async_trait]
    impl Summarizer for EchoSummarizer {
        async fn summarize(&self, text: &str) -> Result<String> {
            Ok(text.to_string())
        }
    }

    fn article(summary: &str) -> Article {
        Article {
            title: "t".to_string(),
            summary: summary.to_string(),
        }
    }

    #[tokio::test]
    async fn identical_topics_are_all_common() {
        let articles = vec![article("growth, earnings"), article("growth, earnings")];
        let overlap = analyze_topic_overlap(&articles, &EchoSummarizer).await;

        let expected: BTreeSet<String> =
            ["growth", "earnings"].iter().map(|s| s.to_string()).collect();
        assert_eq!(overlap.common, expected);
        for per_article in &overlap.unique {
            assert!(per_article.topics.is_empty());
        }
    }

    #[tokio::test]
    async fn unique_sets_are_disjoint_from_common() {
        let articles = vec![
            article("growth, earnings, layoffs"),
            article("growth, lawsuits"),
        ];
        let overlap = analyze_topic_overlap(&articles, &EchoSummarizer).await;

        assert!(overlap.common.contains("growth"));
        for per_article in &overlap.unique {
            assert!(per_article.topics.is_disjoint(&overlap.common));
        }
        assert_eq!(overlap.unique[0].label, "Article 1");
        assert!(overlap.unique[0].topics.contains("layoffs"));
        assert!(overlap.unique[1].topics.contains("lawsuits"));
    }

    #[tokio::test]
    async fn fewer_than_two_articles_is_empty() {
        let overlap = analyze_topic_overlap(&[article("solo")], &EchoSummarizer).await;
        assert!(overlap.is_empty());
        let overlap = analyze_topic_overlap(&[], &EchoSummarizer).await;
        assert!(overlap.is_empty());
    }

    #[test]
    fn split_uses_the_literal_comma_space_separator() {
        let topics = split_topics("a, b,c");
        // "b,c" stays together: only ", " splits
        assert_eq!(topics.len(), 2);
        assert!(topics.contains("a"));
        assert!(topics.contains("b,c"));
    }
}
