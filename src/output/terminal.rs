// Colored terminal output for briefing reports.
//
// Mirrors the report sections one-to-one: articles, sentiment counts,
// coverage differences, topic overlap, the final verdict banner, and
// the Hindi summary with its audio artifact.

use colored::Colorize;

use crate::nlp::traits::Sentiment;
use crate::pipeline::AnalysisReport;

/// Display a full briefing report.
pub fn display_report(report: &AnalysisReport) {
    println!(
        "\n{}",
        format!("=== News Briefing: {} ===", report.company).bold()
    );
    println!(
        "  {}",
        format!("Generated {}", report.generated_at.format("%Y-%m-%d %H:%M UTC")).dimmed()
    );

    display_articles(report);
    display_sentiment_counts(report);
    display_coverage_differences(report);
    display_topic_overlap(report);

    println!("\n{}", "=== Final Sentiment Analysis ===".bold());
    println!("  {}", report.final_summary.green().bold());

    display_hindi_summary(report);
}

fn display_articles(report: &AnalysisReport) {
    println!("\n{}", "=== Latest News Articles ===".bold());
    for (i, analysis) in report.articles.iter().enumerate() {
        println!("\n  {}. {}", i + 1, analysis.article.title.bold());
        println!(
            "     Summary: {}",
            super::truncate_chars(&analysis.article.summary, 200)
        );
        println!("     Sentiment: {}", colorize_sentiment(analysis.sentiment));
        println!("     Key topics: {}", analysis.topics.dimmed());
    }
}

fn display_sentiment_counts(report: &AnalysisReport) {
    println!("\n{}", "=== Comparative Sentiment Score ===".bold());
    println!(
        "  {}: {}   {}: {}   {}: {}",
        "Positive".green(),
        report.tally.positive,
        "Negative".red(),
        report.tally.negative,
        "Neutral".dimmed(),
        report.tally.neutral,
    );
}

fn display_coverage_differences(report: &AnalysisReport) {
    println!("\n{}", "=== Coverage Differences ===".bold());
    if report.comparisons.is_empty() {
        println!("  {}", "Not enough articles for comparison.".yellow());
        return;
    }
    for (i, record) in report.comparisons.iter().enumerate() {
        println!("\n  Comparison {}", i + 1);
        println!("    {}", record.comparison);
        println!("    {}", record.impact.dimmed());
    }
}

fn display_topic_overlap(report: &AnalysisReport) {
    println!("\n{}", "=== Topic Overlap ===".bold());
    if report.overlap.is_empty() {
        println!("  {}", "Not enough articles for topic overlap.".yellow());
        return;
    }

    let common: Vec<&str> = report.overlap.common.iter().map(String::as_str).collect();
    println!("  Common topics: {}", common.join(", "));
    for per_article in &report.overlap.unique {
        let topics: Vec<&str> = per_article.topics.iter().map(String::as_str).collect();
        println!(
            "  {} unique topics: {}",
            per_article.label,
            topics.join(", ").dimmed()
        );
    }
}

fn display_hindi_summary(report: &AnalysisReport) {
    println!("\n{}", "=== Hindi Audio Summary ===".bold());
    match &report.hindi_summary {
        Some(hindi) => println!("  {hindi}"),
        None => {
            println!("  {}", "Error translating summary to Hindi.".red());
            return;
        }
    }
    match &report.audio_path {
        Some(path) => println!("  Audio saved to: {}", path.display().to_string().bold()),
        None => println!(
            "  {}",
            "No audio generated (disabled or rendering failed).".yellow()
        ),
    }
}

/// Colorize a sentiment label.
fn colorize_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    let label = sentiment.to_string();
    match sentiment {
        Sentiment::Positive => label.green(),
        Sentiment::Negative => label.red(),
        Sentiment::Neutral => label.dimmed(),
    }
}
