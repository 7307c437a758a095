// Google Translate TTS implementation.
//
// The same unauthenticated endpoint the gTTS tooling uses: a GET with
// the text and language code, MP3 bytes back. Input length is limited
// by the endpoint (roughly 200 characters per request) — the final
// summaries rendered here stay well under that.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::traits::SpeechSynthesizer;

/// Default translate-TTS endpoint.
pub const DEFAULT_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// Speech synthesizer backed by the Google Translate TTS endpoint.
pub struct GoogleTts {
    client: Client,
    url: String,
}

impl GoogleTts {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, text: &str, lang: &str, out: &Path) -> Result<()> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", lang),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .context("TTS request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("TTS endpoint returned {status}");
        }

        let audio = response
            .bytes()
            .await
            .context("Failed to read TTS audio body")?;

        tokio::fs::write(out, &audio)
            .await
            .with_context(|| format!("Failed to write audio file: {}", out.display()))?;

        debug!(
            bytes = audio.len(),
            path = %out.display(),
            "Rendered audio"
        );

        Ok(())
    }
}
