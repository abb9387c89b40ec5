//! Turns a raw search string into a [`ParsedQuery`].
//!
//! The pipeline, in order:
//!
//! 1. normalize (lower-case, trim, collapse whitespace);
//! 2. extract a place reference and cut its words out of the text;
//! 3. on what remains, detect classification, region, rating floor and
//!    sort order, each with first-match-wins over an ordered table;
//! 4. drop the region when a place was found (the caller re-centers the
//!    map on the place instead);
//! 5. tokenize the remainder into residual search terms, subject to the
//!    [`TermPolicy`].
//!
//! An empty query is a reset: no constraints, the default sort, no terms.

use std::borrow::Cow;

use spot_finder_search_models::{FilterSet, ParsedQuery, SortField, SortOrder};

use crate::classifier::{self, is_classification_keyword};
use crate::keywords::{KeywordTable, contains_keyword};
use crate::place;
use crate::region::{self, is_region_alias};
use crate::text::{is_stop_word, normalize_query, tokenize};

/// Rating qualifiers and the minimum rating each implies.
pub static RATING_KEYWORDS: KeywordTable<'static, u8> = KeywordTable::new(&[
    ("5 star", 5),
    ("5-star", 5),
    ("five star", 5),
    ("4 star", 4),
    ("4-star", 4),
    ("four star", 4),
    ("3 star", 3),
    ("3-star", 3),
    ("three star", 3),
    ("best", 5),
    ("top", 5),
    ("highly rated", 4),
    ("excellent", 5),
    ("great", 4),
    ("good", 3),
]);

/// Ordering qualifiers.
pub static SORT_KEYWORDS: KeywordTable<'static, (SortField, SortOrder)> = KeywordTable::new(&[
    ("top voted", (SortField::Rating, SortOrder::Desc)),
    ("most voted", (SortField::Rating, SortOrder::Desc)),
    ("most votes", (SortField::Rating, SortOrder::Desc)),
    ("community votes", (SortField::Rating, SortOrder::Desc)),
    ("top rated", (SortField::Rating, SortOrder::Desc)),
    ("highest rated", (SortField::Rating, SortOrder::Desc)),
    ("most popular", (SortField::Rating, SortOrder::Desc)),
    ("lowest rated", (SortField::Rating, SortOrder::Asc)),
    ("newest", (SortField::CreatedAt, SortOrder::Desc)),
    ("recently added", (SortField::CreatedAt, SortOrder::Desc)),
    ("date added", (SortField::CreatedAt, SortOrder::Desc)),
    ("latest", (SortField::CreatedAt, SortOrder::Desc)),
    ("oldest", (SortField::CreatedAt, SortOrder::Asc)),
    ("alphabetical", (SortField::Name, SortOrder::Asc)),
    ("by name", (SortField::Name, SortOrder::Asc)),
    ("a-z", (SortField::Name, SortOrder::Asc)),
    ("z-a", (SortField::Name, SortOrder::Desc)),
]);

/// What happens to residual search terms once a classification or region
/// has been detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermPolicy {
    /// Discard all terms once a classification or region is found.
    #[default]
    SuppressOnFilter,
    /// Keep terms regardless of detected filters.
    Retain,
}

impl TermPolicy {
    const fn keeps_terms(self, structural_filter_detected: bool) -> bool {
        match self {
            Self::SuppressOnFilter => !structural_filter_detected,
            Self::Retain => true,
        }
    }
}

/// Configurable query interpreter. [`parse`] uses the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryInterpreter {
    term_policy: TermPolicy,
    extract_places: bool,
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryInterpreter {
    /// Interpreter with place extraction on and
    /// [`TermPolicy::SuppressOnFilter`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            term_policy: TermPolicy::SuppressOnFilter,
            extract_places: true,
        }
    }

    /// Sets the residual-term policy.
    #[must_use]
    pub const fn with_term_policy(mut self, term_policy: TermPolicy) -> Self {
        self.term_policy = term_policy;
        self
    }

    /// Disables place extraction, interpreting the query as if it named no
    /// place. Used when a geocoder could not resolve the extracted place.
    #[must_use]
    pub const fn without_place_extraction(mut self) -> Self {
        self.extract_places = false;
        self
    }

    /// Interprets `raw_query`. Total: never fails, for any input.
    #[must_use]
    pub fn parse(&self, raw_query: &str) -> ParsedQuery {
        let normalized = normalize_query(raw_query);
        if normalized.is_empty() {
            log::trace!("Empty query; resetting filters");
            return ParsedQuery {
                normalized,
                filters: FilterSet::reset(),
                search_terms: Vec::new(),
                place_reference: None,
            };
        }

        let found_place = if self.extract_places {
            place::find_place(&normalized)
        } else {
            None
        };
        let remainder: Cow<'_, str> = match &found_place {
            Some(found) => Cow::Owned(found.remainder(&normalized)),
            None => Cow::Borrowed(normalized.as_str()),
        };

        let classification = classifier::classify_match(&remainder);
        let detected_region = region::match_query_text(&remainder);
        let rating = RATING_KEYWORDS.first_match_entry(&remainder);
        let sort = SORT_KEYWORDS.first_match_entry(&remainder);

        let mut filters = FilterSet {
            classification: classification.map(|(_, c)| c),
            region: detected_region.as_ref().map(|(_, r)| *r),
            min_rating: rating.map(|(_, floor)| floor),
            sort_by: sort.map(|(_, (field, _))| field),
            sort_order: sort.map(|(_, (_, order))| order),
            mine_only: None,
        };

        let search_terms = if self.term_policy.keeps_terms(filters.has_structural_filter()) {
            let matched: Vec<&str> = classification
                .iter()
                .map(|(keyword, _)| *keyword)
                .chain(detected_region.iter().map(|(keyword, _)| keyword.as_ref()))
                .chain(rating.iter().map(|(keyword, _)| *keyword))
                .chain(sort.iter().map(|(keyword, _)| *keyword))
                .flat_map(tokenize)
                .collect();
            residual_terms(&remainder)
                .into_iter()
                .filter(|term| !matched.iter().any(|keyword| contains_keyword(term, keyword)))
                .collect()
        } else {
            Vec::new()
        };

        if found_place.is_some() {
            filters.region = None;
        }
        let place_reference = found_place.as_ref().map(place::PlaceMatch::reference);

        log::debug!(
            "Interpreted {normalized:?}: filters={filters:?} terms={search_terms:?} place={place_reference:?}"
        );

        ParsedQuery {
            normalized,
            filters,
            search_terms,
            place_reference,
        }
    }
}

/// Interprets `raw_query` with the default [`QueryInterpreter`].
#[must_use]
pub fn parse(raw_query: &str) -> ParsedQuery {
    QueryInterpreter::new().parse(raw_query)
}

/// Returns `true` if `word` is one of the words of a rating or sort
/// qualifier (`"star"`, `"highly"`, `"newest"`, ...).
#[must_use]
pub fn is_qualifier_word(word: &str) -> bool {
    RATING_KEYWORDS
        .keywords()
        .chain(SORT_KEYWORDS.keywords())
        .flat_map(tokenize)
        .any(|token| token == word)
}

/// Tokenizes normalized text and keeps the words worth fuzzy-matching:
/// longer than two characters and not a stop word, classification keyword
/// or region alias. Order and duplicates are preserved.
#[must_use]
pub fn residual_terms(normalized: &str) -> Vec<String> {
    tokenize(normalized)
        .filter(|token| token.chars().count() > 2)
        .filter(|token| !is_stop_word(token))
        .filter(|token| !is_classification_keyword(token))
        .filter(|token| !is_region_alias(token))
        .map(str::to_string)
        .collect()
}
