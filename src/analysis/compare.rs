// Pairwise coverage comparison.
//
// Produces templated natural-language statements for each adjacent pair
// of articles. With the analysis window capped at two articles this is
// a single pair in practice, but the walk handles longer lists.

use serde::Serialize;
use tracing::warn;

use crate::news::Article;

/// A templated comparison between two adjacent articles.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRecord {
    pub comparison: String,
    pub impact: String,
}

/// Compare each adjacent article pair. Fewer than two articles is
/// reported and yields an empty list, not an error.
pub fn perform_comparative_analysis(articles: &[Article]) -> Vec<ComparisonRecord> {
    if articles.len() < 2 {
        warn!(
            count = articles.len(),
            "At least 2 articles are required for comparison"
        );
        return Vec::new();
    }

    articles
        .windows(2)
        .enumerate()
        .map(|(i, pair)| ComparisonRecord {
            comparison: format!(
                "Article {} highlights {}, while Article {} discusses {}.",
                i + 1,
                pair[0].title,
                i + 2,
                pair[1].title
            ),
            impact: format!(
                "The first article boosts confidence in {}, while the second raises concerns about {}.",
                pair[0].title, pair[1].title
            ),
        })
        .collect()
}
