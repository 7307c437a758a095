// Memoizing audio renderer.
//
// Identical (text, language, output path) requests within one process
// return the already-rendered file without invoking the engine again.
// Engine failures are memoized the same way: a request that failed once
// keeps failing from cache without re-invoking the engine, and there
// are no retries. A distinct summary rendered to the same path
// overwrites the file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::traits::SpeechSynthesizer;
use crate::cache::BoundedCache;

/// Renders text to audio through a `SpeechSynthesizer`, memoized by the
/// full request triple. The cached value is `None` when the engine
/// failed for that request.
pub struct TtsRenderer {
    synth: Box<dyn SpeechSynthesizer>,
    cache: BoundedCache<(String, String, PathBuf), Option<PathBuf>>,
}

impl TtsRenderer {
    pub fn new(synth: Box<dyn SpeechSynthesizer>) -> Self {
        Self {
            synth,
            cache: BoundedCache::default(),
        }
    }

    /// Render `text` to an audio file, returning its path. Empty text
    /// is an error; callers surface it as a missing artifact rather
    /// than a hard failure.
    pub async fn render(&self, text: &str, lang: &str, out: &Path) -> Result<PathBuf> {
        if text.is_empty() {
            anyhow::bail!("Text for TTS cannot be empty");
        }

        let key = (text.to_string(), lang.to_string(), out.to_path_buf());
        if let Some(cached) = self.cache.get(&key) {
            return match cached {
                Some(path) => {
                    debug!(path = %path.display(), "TTS cache hit");
                    Ok(path)
                }
                None => anyhow::bail!("Audio generation previously failed for this text"),
            };
        }

        if let Err(e) = self.synth.synthesize(text, lang, out).await {
            self.cache.insert(key, None);
            return Err(e);
        }
        let path = out.to_path_buf();
        self.cache.insert(key, Some(path.clone()));
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;

    struct CountingSynth {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl SpeechSynthesizer for CountingSynth {
        async fn synthesize(&self, _text: &str, _lang: &str, out: &Path) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("engine error");
            }
            std::fs::write(out, b"mp3")?;
            Ok(())
        }
    }

    fn renderer(fail: bool) -> (TtsRenderer, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let renderer = TtsRenderer::new(Box::new(CountingSynth {
            calls: calls.clone(),
            fail,
        }));
        (renderer, calls)
    }

    #[tokio::test]
    async fn identical_requests_hit_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output.mp3");
        let (r, calls) = renderer(false);

        let first = r.render("नमस्ते", "hi", &out).await.unwrap();
        let second = r.render("नमस्ते", "hi", &out).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            calls.load(Ordering::SeqCst),
            1,
            "Second render should not invoke the engine"
        );
        assert!(out.exists());
    }

    #[tokio::test]
    async fn distinct_text_renders_again() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output.mp3");
        let (r, calls) = renderer(false);

        r.render("one", "hi", &out).await.unwrap();
        r.render("two", "hi", &out).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_text_skips_the_engine() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output.mp3");
        let (r, calls) = renderer(false);

        assert!(r.render("", "hi", &out).await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn engine_errors_are_memoized() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output.mp3");
        let (r, calls) = renderer(true);

        assert!(r.render("text", "hi", &out).await.is_err());
        assert!(r.render("text", "hi", &out).await.is_err());
        assert_eq!(
            calls.load(Ordering::SeqCst),
            1,
            "A failed request keeps failing from cache without re-invoking the engine"
        );
    }
}
