// Output formatting — terminal display of briefing reports.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing, this respects UTF-8 character boundaries and will
/// never panic on multi-byte characters like Devanagari or emoji.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
    }

    #[test]
    fn multibyte_text_does_not_panic() {
        let hindi = "नवीनतम समाचार कवरेज";
        let out = truncate_chars(hindi, 7);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 10);
    }
}
