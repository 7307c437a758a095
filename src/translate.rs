// Phrase-map English→Hindi translation for the final summary.
//
// This is literal substring substitution over a fixed vocabulary, not
// machine translation. The table is ordered: the three full coverage
// sentences must be replaced before the shorter fragments they contain,
// or a partial match corrupts them. The approach is fragile by nature
// (substring collisions, ordering sensitivity) and is kept as given.

use anyhow::Result;

/// Ordered English→Hindi phrase table. Longest/most-specific first.
const TRANSLATION_MAP: &[(&str, &str)] = &[
    (
        "latest news coverage is mostly positive.",
        "नवीनतम समाचार कवरेज ज्यादातर सकारात्मक है।",
    ),
    (
        "latest news coverage is mostly negative.",
        "नवीनतम समाचार कवरेज ज्यादातर नकारात्मक है।",
    ),
    (
        "latest news coverage is neutral.",
        "नवीनतम समाचार कवरेज तटस्थ है।",
    ),
    ("Out of", "कुल"),
    ("articles", "लेख"),
    ("are positive", "सकारात्मक हैं"),
    ("are negative", "नकारात्मक हैं"),
    ("are neutral", "तटस्थ हैं"),
    (
        "Potential stock growth expected.",
        "संभावित स्टॉक वृद्धि की उम्मीद है।",
    ),
    (
        "Potential stock decline expected.",
        "संभावित स्टॉक गिरावट की उम्मीद है।",
    ),
    (
        "Stock performance is uncertain.",
        "स्टॉक प्रदर्शन अनिश्चित है।",
    ),
];

/// Translate known phrases in the text to Hindi, passing everything
/// else through unchanged. Empty input is an error; callers map it to
/// an empty result at the boundary.
pub fn translate_to_hindi(text: &str) -> Result<String> {
    if text.is_empty() {
        anyhow::bail!("Text for translation cannot be empty");
    }

    let mut translated = text.to_string();
    for (english, hindi) in TRANSLATION_MAP {
        translated = translated.replace(english, hindi);
    }
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_text_passes_through_unchanged() {
        let text = "Quarterly report shows steady revenue.";
        assert_eq!(translate_to_hindi(text).unwrap(), text);
    }

    #[test]
    fn every_occurrence_is_replaced_in_one_pass() {
        let text = "3 are positive and 2 are positive";
        let out = translate_to_hindi(text).unwrap();
        assert!(!out.contains("are positive"));
        assert_eq!(out.matches("सकारात्मक हैं").count(), 2);
    }

    #[test]
    fn full_sentence_wins_over_its_fragments() {
        // "latest news coverage is mostly positive." must not be broken
        // by the shorter "are positive" fragment replacement.
        let out = translate_to_hindi("Acme's latest news coverage is mostly positive.").unwrap();
        assert!(out.contains("नवीनतम समाचार कवरेज ज्यादातर सकारात्मक है।"));
        assert!(out.starts_with("Acme's"));
    }

    #[test]
    fn composed_final_summary_translates_all_phrases() {
        let text = "Acme's latest news coverage is mostly positive. Out of 2 articles, \
                    1 are positive, 0 are negative, and 1 are neutral. \
                    Potential stock growth expected.";
        let out = translate_to_hindi(text).unwrap();
        for (english, hindi) in TRANSLATION_MAP {
            assert!(!out.contains(english), "\"{english}\" left untranslated");
            if text.contains(english) {
                assert!(out.contains(hindi), "\"{hindi}\" missing from output");
            }
        }
        // Numbers and the company name pass through
        assert!(out.contains("Acme"));
        assert!(out.contains('2'));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(translate_to_hindi("").is_err());
    }
}
