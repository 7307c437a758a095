// Full briefing run: fetch → per-article sentiment and topics → pairwise
// comparison and overlap → verdict → Hindi translation → audio.
//
// Strictly sequential — every stage blocks on the previous one, and no
// stage retries. Stage failures degrade per the recovery rules: a failed
// fetch becomes an empty article list, failed translation or audio leave
// those fields unset, and only missing input (no company, no articles)
// aborts the run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::aggregate::{self, SentimentTally};
use crate::analysis::compare::{self, ComparisonRecord};
use crate::analysis::overlap::{self, TopicOverlap};
use crate::news::{Article, ArticleSource, MAX_ANALYZED_ARTICLES};
use crate::nlp::traits::{Sentiment, SentimentClassifier, Summarizer};
use crate::translate;
use crate::tts::renderer::TtsRenderer;
use crate::tts::DEFAULT_LANGUAGE;

/// One article with its derived labels.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleAnalysis {
    pub article: Article,
    pub sentiment: Sentiment,
    pub topics: String,
}

/// Everything a single briefing run produces.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub company: String,
    pub generated_at: DateTime<Utc>,
    pub articles: Vec<ArticleAnalysis>,
    pub tally: SentimentTally,
    pub comparisons: Vec<ComparisonRecord>,
    pub overlap: TopicOverlap,
    pub final_summary: String,
    /// Unset when translation failed.
    pub hindi_summary: Option<String>,
    /// Unset when audio was disabled or rendering failed.
    pub audio_path: Option<PathBuf>,
}

/// Run the full briefing pipeline for a company.
///
/// `renderer` is `None` when audio output is disabled; `audio_path` is
/// where the Hindi rendition lands otherwise.
pub async fn run(
    source: &dyn ArticleSource,
    classifier: &dyn SentimentClassifier,
    summarizer: &dyn Summarizer,
    renderer: Option<&TtsRenderer>,
    audio_path: &Path,
    company: &str,
) -> Result<AnalysisReport> {
    if company.is_empty() {
        anyhow::bail!("Please enter a company name.");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Fetching news articles...");

    // A transport failure is recovered as "nothing found", not a crash.
    let fetched = match source.fetch(company).await {
        Ok(articles) => articles,
        Err(e) => {
            warn!(error = %e, company = company, "Failed to fetch news");
            Vec::new()
        }
    };

    if fetched.is_empty() {
        pb.finish_and_clear();
        anyhow::bail!("Enter a valid company name. No news articles found for the given name.");
    }

    // Analyze at most two articles regardless of how many came back.
    let articles: Vec<Article> = fetched
        .into_iter()
        .take(MAX_ANALYZED_ARTICLES)
        .collect();
    info!(company = company, count = articles.len(), "Analyzing articles");

    pb.set_message("Scoring sentiment and extracting topics...");
    let mut analyses = Vec::with_capacity(articles.len());
    let mut tally = SentimentTally::default();
    for article in &articles {
        let sentiment = crate::nlp::classify_or_neutral(classifier, &article.summary).await;
        let topics = crate::nlp::extract_topics(summarizer, &article.summary).await;
        tally.record(sentiment);
        analyses.push(ArticleAnalysis {
            article: article.clone(),
            sentiment,
            topics,
        });
    }

    pb.set_message("Comparing coverage...");
    let comparisons = compare::perform_comparative_analysis(&articles);
    let overlap = overlap::analyze_topic_overlap(&articles, summarizer).await;
    let final_summary = aggregate::final_summary(company, &tally);

    let hindi_summary = match translate::translate_to_hindi(&final_summary) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, "Translation failed");
            None
        }
    };

    let audio = match (renderer, hindi_summary.as_deref()) {
        (Some(renderer), Some(hindi)) => {
            pb.set_message("Rendering Hindi audio...");
            match renderer.render(hindi, DEFAULT_LANGUAGE, audio_path).await {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(error = %e, "Audio rendering failed");
                    None
                }
            }
        }
        _ => None,
    };
    pb.finish_and_clear();

    Ok(AnalysisReport {
        company: company.to_string(),
        generated_at: Utc::now(),
        articles: analyses,
        tally,
        comparisons,
        overlap,
        final_summary,
        hindi_summary,
        audio_path: audio,
    })
}
