// Model wrappers — sentiment classification and summarization.
//
// Both models are external black boxes reached over HTTP. The pipeline
// never sees their failures: the boundary helpers below map empty input
// and model errors to safe defaults.

pub mod hf;
pub mod traits;

use tracing::warn;

use self::traits::{Sentiment, SentimentClassifier, Summarizer};

/// Placeholder returned when topic extraction has nothing to work with
/// or the summarization model fails.
pub const NO_TOPICS: &str = "No topics extracted";

/// Classify text, defaulting to `Neutral` for empty input or model failure.
/// The model is never invoked for empty text.
pub async fn classify_or_neutral(classifier: &dyn SentimentClassifier, text: &str) -> Sentiment {
    if text.is_empty() {
        return Sentiment::Neutral;
    }
    match classifier.classify(text).await {
        Ok(sentiment) => sentiment,
        Err(e) => {
            warn!(error = %e, "Sentiment classification failed, defaulting to Neutral");
            Sentiment::Neutral
        }
    }
}

/// Extract a topic phrase via truncated summarization, defaulting to the
/// "No topics extracted" placeholder for empty input or model failure.
pub async fn extract_topics(summarizer: &dyn Summarizer, text: &str) -> String {
    if text.is_empty() {
        return NO_TOPICS.to_string();
    }
    match summarizer.summarize(text).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!(error = %e, "Topic extraction failed, using placeholder");
            NO_TOPICS.to_string()
        }
    }
}
