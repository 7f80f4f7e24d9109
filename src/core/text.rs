//! Plain-text metrics and clean-up applied to provider output.

use regex::Regex;
use std::sync::LazyLock;

/// Narration pace used for duration estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Number of story characters shown to the title provider.
pub const TITLE_EXCERPT_CHARS: usize = 500;

static NUMBERED_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.").expect("numbered point pattern is valid"));

/// Number of whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts "digits followed by a period" markers.
///
/// This is a rough proxy for numbered list items, not a structural parse:
/// `3.14` counts once, and so does a year ending a sentence.
pub fn count_numbered_points(text: &str) -> usize {
    NUMBERED_POINT.find_iter(text).count()
}

/// Spoken duration in whole minutes, `round(word_count / 200)` with halves
/// rounding up.
pub fn estimate_duration_minutes(word_count: usize) -> u64 {
    ((word_count + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE) as u64
}

/// Removes every single and double quote character, then trims.
pub fn strip_quotes(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Returns at most the first `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_uses_any_whitespace() {
        assert_eq!(word_count("one two\tthree\n\nfour   five"), 5);
        assert_eq!(word_count("  leading and trailing  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \n\t "), 0);
    }

    #[test]
    fn test_count_numbered_points() {
        let research = "Intro\n1. Fact one.\n2. Fact two.\n10. Fact ten.";
        assert_eq!(count_numbered_points(research), 3);
        assert_eq!(count_numbered_points("no markers here"), 0);
        // Crude on purpose: decimals count too.
        assert_eq!(count_numbered_points("pi is 3.14"), 1);
    }

    #[test]
    fn test_estimate_duration_rounds_half_up() {
        assert_eq!(estimate_duration_minutes(0), 0);
        assert_eq!(estimate_duration_minutes(99), 0);
        assert_eq!(estimate_duration_minutes(100), 1);
        assert_eq!(estimate_duration_minutes(299), 1);
        assert_eq!(estimate_duration_minutes(300), 2);
        assert_eq!(estimate_duration_minutes(2500), 13);
        assert_eq!(estimate_duration_minutes(2800), 14);
    }

    #[test]
    fn test_strip_quotes_removes_all_quote_characters() {
        assert_eq!(strip_quotes("\"The Invisible Giants\""), "The Invisible Giants");
        assert_eq!(strip_quotes("'Stars' \"and\" Dust\n"), "Stars and Dust");
        assert_eq!(strip_quotes("Nature's Engines"), "Natures Engines");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("abcdef", 3), "abc");
        assert_eq!(excerpt("abc", 10), "abc");
        assert_eq!(excerpt("héllo wörld", 5), "héllo");
    }
}
