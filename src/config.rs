use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// NewsAPI key — required for the `analyze` command.
    pub news_api_key: String,
    /// News search endpoint (defaults to the NewsAPI "everything" endpoint).
    pub news_url: String,
    /// Hugging Face Inference API token. Optional — anonymous calls work
    /// but are heavily rate-limited.
    pub hf_api_token: String,
    /// Inference API base URL.
    pub hf_url: String,
    /// Model id used for sentiment classification.
    pub sentiment_model: String,
    /// Model id used for summarization ("topic extraction").
    pub summary_model: String,
    /// Text-to-speech endpoint URL.
    pub tts_url: String,
    /// Where the rendered Hindi audio lands. Overwritten per distinct summary.
    pub audio_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the NewsAPI key has a sensible default, so
    /// `translate` and `speak` run without any setup.
    pub fn load() -> Result<Self> {
        Ok(Self {
            news_api_key: env::var("NEWS_API_KEY").unwrap_or_default(),
            news_url: env::var("KHABAR_NEWS_URL")
                .unwrap_or_else(|_| crate::news::client::DEFAULT_NEWS_URL.to_string()),
            hf_api_token: env::var("HF_API_TOKEN").unwrap_or_default(),
            hf_url: env::var("KHABAR_HF_URL")
                .unwrap_or_else(|_| crate::nlp::hf::DEFAULT_HF_URL.to_string()),
            sentiment_model: env::var("KHABAR_SENTIMENT_MODEL")
                .unwrap_or_else(|_| crate::nlp::hf::DEFAULT_SENTIMENT_MODEL.to_string()),
            summary_model: env::var("KHABAR_SUMMARY_MODEL")
                .unwrap_or_else(|_| crate::nlp::hf::DEFAULT_SUMMARY_MODEL.to_string()),
            tts_url: env::var("KHABAR_TTS_URL")
                .unwrap_or_else(|_| crate::tts::gtts::DEFAULT_TTS_URL.to_string()),
            audio_path: env::var("KHABAR_AUDIO_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output.mp3")),
        })
    }

    /// Check that the NewsAPI key is configured.
    /// Call this before any operation that fetches news articles.
    pub fn require_news(&self) -> Result<()> {
        if self.news_api_key.is_empty() {
            anyhow::bail!(
                "NEWS_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
