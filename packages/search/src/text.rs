//! Query normalization, tokenization and the stop-word list.

/// Words that carry no search meaning on their own ("show me all the
/// spots near ...").
pub static STOP_WORDS: &[&str] = &[
    "show", "me", "all", "the", "find", "search", "for", "get", "list", "display", "where", "are",
    "is", "in", "at", "near", "around", "locations", "location", "spots", "spot", "places",
    "place", "areas", "area", "sites", "site", "a", "an", "and", "with", "that", "have", "has",
    "please", "can", "you", "i", "want", "to", "see", "looking", "look", "give", "any",
];

/// Lower-cases, trims and collapses internal whitespace to single spaces.
///
/// Idempotent: normalizing an already-normalized string returns it
/// unchanged.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits normalized text into word tokens, trimming punctuation from the
/// edges of each token (`"florence,"` → `"florence"`).
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
}

/// Returns `true` if `word` is a stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(
            normalize_query("  Bash   Spots\tin\nCALIFORNIA "),
            "bash spots in california"
        );
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let once = normalize_query(" Race  TRACKS, Austin TX ");
        assert_eq!(normalize_query(&once), once);
    }

    #[test]
    fn whitespace_only_normalizes_to_empty() {
        assert_eq!(normalize_query(" \t\n "), "");
    }

    #[test]
    fn tokenize_trims_edge_punctuation() {
        let tokens: Vec<_> = tokenize("florence, or! 5-star (quiet)").collect();
        assert_eq!(tokens, ["florence", "or", "5-star", "quiet"]);
    }

    #[test]
    fn tokenize_drops_pure_punctuation() {
        assert_eq!(tokenize("- , !!").count(), 0);
    }

    #[test]
    fn stop_words() {
        assert!(is_stop_word("spot"));
        assert!(is_stop_word("near"));
        assert!(!is_stop_word("river"));
    }
}
