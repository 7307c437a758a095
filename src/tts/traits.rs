// Speech synthesizer trait — the swap-ready abstraction.
//
// The default implementation calls the Google Translate TTS endpoint.
// The renderer and the tests only see this trait.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for rendering text to a spoken-audio file.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in the given language and write the audio
    /// to `out`. Overwrites any existing file at that path.
    async fn synthesize(&self, text: &str, lang: &str, out: &Path) -> Result<()>;
}
