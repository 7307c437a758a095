// Text-to-speech — engine trait, the Google TTS backend, and the
// memoizing renderer the pipeline talks to.

pub mod gtts;
pub mod renderer;
pub mod traits;

/// Language code used for the audio summary.
pub const DEFAULT_LANGUAGE: &str = "hi";
