//! Client-side matching of spot listings against a parsed query.

use spot_finder_search_models::{FilterSet, ParsedQuery, SpotListing};

/// Returns `true` if `spot` meets the rating floor and, when `terms` is
/// non-empty, at least one term occurs in its name or description.
#[must_use]
pub fn matches_search(spot: &SpotListing, terms: &[String], min_rating: Option<u8>) -> bool {
    if min_rating.is_some_and(|floor| spot.rating < floor) {
        return false;
    }

    if terms.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {}",
        spot.name,
        spot.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    terms.iter().any(|term| haystack.contains(term.as_str()))
}

/// Returns `true` if `spot` satisfies the classification, region and rating
/// constraints in `filters`.
#[must_use]
pub fn matches_filters(spot: &SpotListing, filters: &FilterSet) -> bool {
    filters
        .classification
        .is_none_or(|c| c == spot.classification)
        && filters.region.is_none_or(|r| spot.region == Some(r))
        && matches_search(spot, &[], filters.min_rating)
}

/// Yields the spots that satisfy both the filters and the search terms of
/// `parsed`, in input order.
pub fn filter_spots<'a>(
    spots: &'a [SpotListing],
    parsed: &'a ParsedQuery,
) -> impl Iterator<Item = &'a SpotListing> {
    spots.iter().filter(move |spot| {
        matches_filters(spot, &parsed.filters) && matches_search(spot, &parsed.search_terms, None)
    })
}
