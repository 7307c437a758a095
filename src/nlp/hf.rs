// Hugging Face Inference API implementations.
//
// Hosted inference over off-the-shelf models. Anonymous calls work but
// are rate-limited; set HF_API_TOKEN for authenticated access. Both
// wrappers are behind the nlp traits so a local runtime or another
// provider can be swapped in without touching the pipeline.
//
// API docs: https://huggingface.co/docs/api-inference

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{Sentiment, SentimentClassifier, Summarizer};

/// Default Inference API base URL.
pub const DEFAULT_HF_URL: &str = "https://api-inference.huggingface.co";

/// Default three-class sentiment model.
pub const DEFAULT_SENTIMENT_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";

/// Default summarization model.
pub const DEFAULT_SUMMARY_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

/// Summarization length bounds — truncated summaries double as topic phrases.
const SUMMARY_MAX_LENGTH: u32 = 30;
const SUMMARY_MIN_LENGTH: u32 = 10;

/// Shared plumbing for both model wrappers.
struct HfEndpoint {
    client: Client,
    url: String,
    api_token: String,
}

impl HfEndpoint {
    fn new(base_url: &str, model: &str, api_token: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}/models/{}", base_url.trim_end_matches('/'), model),
            api_token: api_token.to_string(),
        }
    }

    /// POST a serialized request and deserialize the model output.
    async fn call<Req, Resp>(&self, request: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: serde::de::DeserializeOwned,
    {
        let mut builder = self.client.post(&self.url).json(request);
        if !self.api_token.is_empty() {
            builder = builder.bearer_auth(&self.api_token);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("Inference request failed: {}", self.url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Inference API returned {status}: {body}");
        }

        response
            .json::<Resp>()
            .await
            .context("Failed to parse inference response")
    }
}

/// Sentiment classifier backed by a hosted text-classification model.
pub struct HfSentimentClassifier {
    endpoint: HfEndpoint,
}

impl HfSentimentClassifier {
    pub fn new(base_url: &str, model: &str, api_token: &str) -> Self {
        Self {
            endpoint: HfEndpoint::new(base_url, model, api_token),
        }
    }
}

#[async_trait]
impl SentimentClassifier for HfSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        let request = ClassifyRequest {
            inputs: text.to_string(),
        };

        // The API nests per-input label lists: [[{label, score}, ...]]
        let batches: Vec<Vec<LabelScore>> = self.endpoint.call(&request).await?;
        let top = batches
            .first()
            .and_then(|labels| {
                labels
                    .iter()
                    .max_by(|a, b| a.score.total_cmp(&b.score))
            })
            .ok_or_else(|| anyhow::anyhow!("Classifier returned no labels"))?;

        debug!(
            label = top.label,
            score = top.score,
            text_preview = preview(text),
            "Classified text"
        );

        // The confidence score is unused beyond picking the top label.
        Ok(Sentiment::from_label(&top.label))
    }
}

/// Summarizer backed by a hosted summarization model, tuned for short
/// deterministic output (no sampling).
pub struct HfSummarizer {
    endpoint: HfEndpoint,
}

impl HfSummarizer {
    pub fn new(base_url: &str, model: &str, api_token: &str) -> Self {
        Self {
            endpoint: HfEndpoint::new(base_url, model, api_token),
        }
    }
}

#[async_trait]
impl Summarizer for HfSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let request = SummarizeRequest {
            inputs: text.to_string(),
            parameters: SummarizeParameters {
                max_length: SUMMARY_MAX_LENGTH,
                min_length: SUMMARY_MIN_LENGTH,
                do_sample: false,
            },
        };

        let outputs: Vec<SummaryOutput> = self.endpoint.call(&request).await?;
        let summary = outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| anyhow::anyhow!("Summarizer returned no output"))?;

        debug!(
            summary = summary,
            text_preview = preview(text),
            "Summarized text"
        );

        Ok(summary)
    }
}

/// Log preview of model input. Truncates on character boundaries —
/// article summaries are routinely multibyte (Devanagari, emoji) and a
/// byte slice at a fixed offset panics mid-character.
fn preview(text: &str) -> String {
    crate::output::truncate_chars(text, 50)
}

// --- Inference API request/response types ---

#[derive(Serialize)]
struct ClassifyRequest {
    inputs: String,
}

#[derive(Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Serialize)]
struct SummarizeRequest {
    inputs: String,
    parameters: SummarizeParameters,
}

#[derive(Serialize)]
struct SummarizeParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_safe_on_multibyte_input() {
        // 60 three-byte Devanagari chars: byte 50 falls inside a char,
        // so a byte slice would panic here. The preview must not.
        let text = "ह".repeat(60);
        let p = preview(&text);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), 53);
    }

    #[test]
    fn preview_passes_short_text_through() {
        assert_eq!(preview("short summary"), "short summary");
    }
}
