//! Best-effort extraction of a `"locality, state"` reference from a query.
//!
//! Three shapes are tried in order, first match wins:
//!
//! 1. multi-word locality, comma, state (`"los angeles, ca"`)
//! 2. single-word locality, comma, state (catches one-letter localities the
//!    first shape cannot)
//! 3. locality then state at the very end, no comma (`"seattle washington"`)
//!
//! The state must be a whole-word member of the 50-state name/abbreviation
//! set. Leading filler such as "bash spots near" is stripped from the
//! captured locality; if nothing is left the shape is rejected and the next
//! one is tried. The locality is never checked against a gazetteer.

use std::cmp::Reverse;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::is_classification_keyword;
use crate::interpreter::is_qualifier_word;
use crate::region;
use crate::text::{is_stop_word, normalize_query};

/// Domain words, beyond the classification and qualifier vocabulary, that
/// may precede a locality but are never the start of one.
static DOMAIN_FILLER: &[&str] = &["rc", "cool"];

/// Regex alternation of every state name and abbreviation, longest first
/// so that `oregon` is preferred over `or`.
fn state_alternation() -> String {
    let mut tokens: Vec<&str> = region::fifty_states()
        .flat_map(|s| [s.name, s.abbr])
        .collect();
    tokens.sort_by_key(|t| Reverse(t.len()));
    tokens
        .iter()
        .map(|t| regex::escape(t).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

/// The three place shapes, in precedence order.
static PLACE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    let states = state_alternation();
    [
        Regex::new(&format!(r"(?i)\b([a-z][a-z\s]*[a-z]),\s*({states})\b"))
            .expect("valid regex"),
        Regex::new(&format!(r"(?i)\b([a-z]+),\s*({states})\b")).expect("valid regex"),
        Regex::new(&format!(r"(?i)\b([a-z]+)\s+({states})$")).expect("valid regex"),
    ]
});

/// A place reference found in a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceMatch {
    /// Locality with leading filler removed.
    pub locality: String,
    /// State token exactly as it appeared in the query.
    pub state: String,
    /// Byte range of `"<locality>, <state>"` in the searched text.
    pub span: Range<usize>,
}

impl PlaceMatch {
    /// The reference to send to a geocoder: `"<locality>, <state>"`.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("{}, {}", self.locality, self.state)
    }

    /// `text` with the words consumed by this place removed, normalized.
    ///
    /// `text` must be the string this match was found in.
    #[must_use]
    pub fn remainder(&self, text: &str) -> String {
        let before = text.get(..self.span.start).unwrap_or_default();
        let after = text.get(self.span.end..).unwrap_or_default();
        normalize_query(&format!("{before} {after}"))
    }
}

fn is_filler_word(word: &str) -> bool {
    is_stop_word(word)
        || is_classification_keyword(word)
        || is_qualifier_word(word)
        || DOMAIN_FILLER.contains(&word)
}

/// A word is locality filler if it, or its singular, is a stop word,
/// classification keyword, qualifier word or domain word.
fn is_locality_prefix(word: &str) -> bool {
    let word = word.to_ascii_lowercase();
    is_filler_word(&word) || word.strip_suffix('s').is_some_and(is_filler_word)
}

/// Repeatedly removes leading filler words. Returns a suffix of `locality`.
fn strip_locality_prefixes(locality: &str) -> &str {
    let mut rest = locality.trim_start();
    loop {
        let (word, tail) = rest
            .split_once(char::is_whitespace)
            .unwrap_or((rest, ""));
        if word.is_empty() || !is_locality_prefix(word) {
            return rest;
        }
        rest = tail.trim_start();
    }
}

/// Finds a place reference in already-normalized text.
#[must_use]
pub fn find_place(normalized_query: &str) -> Option<PlaceMatch> {
    PLACE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(normalized_query)?;
        let (locality, state) = (caps.get(1)?, caps.get(2)?);

        let stripped = strip_locality_prefixes(locality.as_str()).trim_end();
        if stripped.is_empty() {
            return None;
        }

        let start = locality.start() + locality.as_str().trim_end().len() - stripped.len();
        Some(PlaceMatch {
            locality: stripped.split_whitespace().collect::<Vec<_>>().join(" "),
            state: state.as_str().to_string(),
            span: start..state.end(),
        })
    })
}

/// Extracts a `"locality, state"` reference from a raw query.
#[must_use]
pub fn extract_place(raw_query: &str) -> Option<String> {
    find_place(&normalize_query(raw_query)).map(|m| m.reference())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separated_multi_word_locality() {
        assert_eq!(
            extract_place("Los Angeles, CA"),
            Some("los angeles, ca".to_string())
        );
        assert_eq!(
            extract_place("bash spots near los angeles, ca"),
            Some("los angeles, ca".to_string())
        );
    }

    #[test]
    fn strips_filler_before_locality() {
        assert_eq!(
            extract_place("spots in florence, or"),
            Some("florence, or".to_string())
        );
        assert_eq!(
            extract_place("5 star race tracks in austin, tx"),
            Some("austin, tx".to_string())
        );
    }

    #[test]
    fn single_letter_locality_uses_second_shape() {
        assert_eq!(extract_place("x, tx"), Some("x, tx".to_string()));
    }

    #[test]
    fn no_comma_shape_needs_state_at_end() {
        assert_eq!(
            extract_place("seattle washington"),
            Some("seattle, washington".to_string())
        );
        assert_eq!(
            extract_place("crawl spots boise idaho"),
            Some("boise, idaho".to_string())
        );
        assert_eq!(extract_place("seattle washington tracks"), None);
    }

    #[test]
    fn prefers_full_state_name_over_abbreviation() {
        assert_eq!(
            extract_place("bend, oregon"),
            Some("bend, oregon".to_string())
        );
    }

    #[test]
    fn state_must_be_a_whole_word() {
        assert_eq!(extract_place("orlando, flat"), None);
        assert_eq!(
            extract_place("florence, oregon coast"),
            Some("florence, oregon".to_string())
        );
    }

    #[test]
    fn all_filler_locality_is_rejected() {
        assert_eq!(extract_place("5 star race tracks in texas"), None);
        assert_eq!(extract_place("bash spots in california"), None);
        assert_eq!(extract_place("tracks, tx"), None);
        assert_eq!(extract_place("trails in or"), None);
    }

    #[test]
    fn every_classification_keyword_is_filler() {
        assert_eq!(extract_place("rc planes, texas"), None);
        assert_eq!(extract_place("rock crawling trails, utah"), None);
        assert_eq!(extract_place("boat ponds florida"), None);
        assert_eq!(extract_place("crawl trails colorado"), None);
        assert_eq!(
            extract_place("fly field near boise, idaho"),
            Some("boise, idaho".to_string())
        );
        assert_eq!(
            extract_place("newest aircraft spots in mesa, az"),
            Some("mesa, az".to_string())
        );
    }

    #[test]
    fn non_state_suffix_is_not_a_place() {
        assert_eq!(extract_place("quiet spot near the river"), None);
        assert_eq!(extract_place("toronto, ontario"), None);
        assert_eq!(extract_place(""), None);
    }

    #[test]
    fn span_covers_locality_and_state() {
        let text = "spots in florence, or";
        let m = find_place(text).unwrap();
        assert_eq!(&text[m.span.clone()], "florence, or");
        assert_eq!(m.remainder(text), "spots in");
    }

    #[test]
    fn remainder_keeps_words_after_the_place() {
        let text = "tracks near bend, oregon with jumps";
        let m = find_place(text).unwrap();
        assert_eq!(m.reference(), "bend, oregon");
        assert_eq!(m.remainder(text), "tracks near with jumps");
    }
}
