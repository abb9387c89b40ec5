//! Ordered keyword tables with first-match-wins lookup.
//!
//! Every table in the interpreter is an ordered slice of
//! `(keyword, value)` pairs rather than a map. When a query contains
//! keywords for several values, the entry that appears **earliest in the
//! table** wins, regardless of where the keywords appear in the query.

/// Keywords this short only match as whole words.
///
/// Two-letter state abbreviations such as `"ri"` or `"ar"` would otherwise
/// match inside ordinary words ("river", "near").
pub const WHOLE_WORD_MAX_LEN: usize = 2;

/// Returns `true` if `keyword` occurs in `text`.
///
/// Keywords longer than [`WHOLE_WORD_MAX_LEN`] match as plain substrings;
/// shorter ones must equal a whole alphanumeric word of `text`.
#[must_use]
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    if keyword.len() <= WHOLE_WORD_MAX_LEN {
        return text
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == keyword);
    }
    text.contains(keyword)
}

/// An ordered `(keyword, value)` table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable<'a, T> {
    entries: &'a [(&'a str, T)],
}

impl<'a, T: Copy> KeywordTable<'a, T> {
    /// Wraps an ordered slice of entries.
    #[must_use]
    pub const fn new(entries: &'a [(&'a str, T)]) -> Self {
        Self { entries }
    }

    /// Returns the first entry (in table order) whose keyword occurs in
    /// `text`.
    #[must_use]
    pub fn first_match_entry(&self, text: &str) -> Option<(&'a str, T)> {
        self.entries
            .iter()
            .find(|(keyword, _)| contains_keyword(text, keyword))
            .copied()
    }

    /// Returns the value of the first entry whose keyword occurs in `text`.
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<T> {
        self.first_match_entry(text).map(|(_, value)| value)
    }

    /// Returns `true` if `word` is exactly one of the table's keywords.
    #[must_use]
    pub fn contains_key(&self, word: &str) -> bool {
        self.entries.iter().any(|(keyword, _)| *keyword == word)
    }

    /// Iterates the keywords in table order.
    pub fn keywords(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(keyword, _)| *keyword)
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
