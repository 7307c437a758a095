// Model traits — the swap-ready abstractions.
//
// The default implementations call the Hugging Face Inference API, but
// nothing downstream depends on that: the pipeline only sees these traits,
// and the tests substitute scripted implementations.

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Coarse sentiment label for a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Map a provider label to a sentiment. Case-insensitive; anything
    /// that isn't clearly positive or negative lands on Neutral.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "positive" | "label_2" => Sentiment::Positive,
            "negative" | "label_0" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        };
        write!(f, "{s}")
    }
}

/// Trait for classifying the sentiment of a piece of text. Implementations
/// are async because the providers are HTTP APIs.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Return the top sentiment label for the text.
    async fn classify(&self, text: &str) -> Result<Sentiment>;
}

/// Trait for condensing text into a short topic phrase.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a condensed phrase for the text.
    async fn summarize(&self, text: &str) -> Result<String>;
}
