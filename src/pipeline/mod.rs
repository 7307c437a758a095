// The end-to-end briefing pipeline.

pub mod run;

pub use self::run::{run, AnalysisReport, ArticleAnalysis};
