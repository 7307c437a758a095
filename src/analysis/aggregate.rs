// Sentiment tally and the final verdict.
//
// Majority wins by strict count comparison; any tie (including the
// all-neutral case) takes the neutral/uncertain branch. The template
// strings here are also the translation vocabulary — changing one
// without the other breaks the Hindi rendition.

use serde::Serialize;

use crate::nlp::traits::Sentiment;

/// Per-run sentiment counts. Always sums to the processed article count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    /// Tally a slice of per-article labels.
    pub fn from_labels(labels: &[Sentiment]) -> Self {
        let mut tally = Self::default();
        for label in labels {
            tally.record(*label);
        }
        tally
    }

    pub fn record(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// The overall coverage description for this tally.
    pub fn sentiment_description(&self) -> &'static str {
        if self.positive > self.negative {
            "latest news coverage is mostly positive."
        } else if self.negative > self.positive {
            "latest news coverage is mostly negative."
        } else {
            "latest news coverage is neutral."
        }
    }

    /// The qualitative stock-outlook phrase for this tally.
    pub fn stock_outlook(&self) -> &'static str {
        if self.positive > self.negative {
            "Potential stock growth expected."
        } else if self.negative > self.positive {
            "Potential stock decline expected."
        } else {
            "Stock performance is uncertain."
        }
    }
}

/// Compose the final summary string from the company name and tally.
pub fn final_summary(company: &str, tally: &SentimentTally) -> String {
    format!(
        "{}'s {} Out of {} articles, {} are positive, {} are negative, and {} are neutral. {}",
        company,
        tally.sentiment_description(),
        tally.total(),
        tally.positive,
        tally.negative,
        tally.neutral,
        tally.stock_outlook(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_sums_to_label_count() {
        let labels = [
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Neutral,
            Sentiment::Positive,
        ];
        let tally = SentimentTally::from_labels(&labels);
        assert_eq!(tally.total(), labels.len());
        assert_eq!(tally.positive, 2);
        assert_eq!(tally.negative, 1);
        assert_eq!(tally.neutral, 1);
    }

    #[test]
    fn positive_majority_picks_growth() {
        let tally = SentimentTally::from_labels(&[Sentiment::Positive, Sentiment::Neutral]);
        assert_eq!(
            tally.sentiment_description(),
            "latest news coverage is mostly positive."
        );
        assert_eq!(tally.stock_outlook(), "Potential stock growth expected.");
    }

    #[test]
    fn negative_majority_picks_decline() {
        let tally = SentimentTally::from_labels(&[Sentiment::Negative, Sentiment::Negative]);
        assert_eq!(
            tally.sentiment_description(),
            "latest news coverage is mostly negative."
        );
        assert_eq!(tally.stock_outlook(), "Potential stock decline expected.");
    }

    #[test]
    fn nonzero_tie_is_neutral() {
        let tally = SentimentTally::from_labels(&[Sentiment::Positive, Sentiment::Negative]);
        assert_eq!(
            tally.sentiment_description(),
            "latest news coverage is neutral."
        );
        assert_eq!(tally.stock_outlook(), "Stock performance is uncertain.");
    }

    #[test]
    fn all_neutral_is_neutral() {
        let tally = SentimentTally::from_labels(&[Sentiment::Neutral, Sentiment::Neutral]);
        assert_eq!(
            tally.sentiment_description(),
            "latest news coverage is neutral."
        );
        assert_eq!(tally.stock_outlook(), "Stock performance is uncertain.");
    }

    #[test]
    fn final_summary_interpolates_company_and_counts() {
        let tally = SentimentTally::from_labels(&[Sentiment::Positive, Sentiment::Neutral]);
        let summary = final_summary("Acme", &tally);
        assert_eq!(
            summary,
            "Acme's latest news coverage is mostly positive. Out of 2 articles, \
             1 are positive, 0 are negative, and 1 are neutral. \
             Potential stock growth expected."
        );
    }
}
