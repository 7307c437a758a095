// Khabar: company news sentiment briefings with Hindi audio summaries.
//
// This is the library root. Each module corresponds to a stage of the
// briefing pipeline.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod news;
pub mod nlp;
pub mod output;
pub mod pipeline;
pub mod translate;
pub mod tts;
