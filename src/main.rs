use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use khabar::config::Config;

/// Khabar: company news sentiment briefings with Hindi audio summaries.
///
/// Fetches the latest coverage for a company, scores each article's
/// sentiment, extracts topics, compares the coverage, and renders the
/// verdict as spoken Hindi.
#[derive(Parser)]
#[command(name = "khabar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the latest news coverage for a company
    Analyze {
        /// Company name to search news for
        company: String,

        /// Skip the Hindi audio rendition
        #[arg(long)]
        no_audio: bool,

        /// Where to write the audio file (default: KHABAR_AUDIO_PATH or output.mp3)
        #[arg(long)]
        audio_path: Option<PathBuf>,
    },

    /// Translate a summary phrase to Hindi (phrase-map translation)
    Translate {
        /// English text to translate
        text: String,
    },

    /// Render text as spoken audio
    Speak {
        /// Text to speak
        text: String,

        /// Language code (default: hi)
        #[arg(long, default_value = khabar::tts::DEFAULT_LANGUAGE)]
        lang: String,

        /// Output file path
        #[arg(long, default_value = "output.mp3")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("khabar=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            company,
            no_audio,
            audio_path,
        } => {
            let config = Config::load()?;
            config.require_news()?;

            let source = khabar::news::cache::CachedSource::new(
                khabar::news::client::NewsApiClient::new(&config.news_url, &config.news_api_key)?,
            );
            let classifier = khabar::nlp::hf::HfSentimentClassifier::new(
                &config.hf_url,
                &config.sentiment_model,
                &config.hf_api_token,
            );
            let summarizer = khabar::nlp::hf::HfSummarizer::new(
                &config.hf_url,
                &config.summary_model,
                &config.hf_api_token,
            );

            let renderer = if no_audio {
                None
            } else {
                Some(khabar::tts::renderer::TtsRenderer::new(Box::new(
                    khabar::tts::gtts::GoogleTts::new(&config.tts_url),
                )))
            };
            let audio_path = audio_path.unwrap_or(config.audio_path);

            info!(company = company, "Starting briefing run");

            let report = khabar::pipeline::run(
                &source,
                &classifier,
                &summarizer,
                renderer.as_ref(),
                &audio_path,
                &company,
            )
            .await?;
            khabar::output::terminal::display_report(&report);
        }

        Commands::Translate { text } => {
            let hindi = khabar::translate::translate_to_hindi(&text)?;
            println!("{hindi}");
        }

        Commands::Speak { text, lang, out } => {
            let config = Config::load()?;
            let renderer = khabar::tts::renderer::TtsRenderer::new(Box::new(
                khabar::tts::gtts::GoogleTts::new(&config.tts_url),
            ));

            println!("Rendering audio ({lang})...");
            let path = renderer.render(&text, &lang, &out).await?;
            println!("{}", format!("Audio saved to: {}", path.display()).bold());
        }
    }

    Ok(())
}
