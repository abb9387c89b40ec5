//! Filter state and the structured result of interpreting a search query.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::{Classification, Region};

/// Field the spot list is ordered by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    /// Alphabetical by spot name.
    Name,
    /// By rating / community vote score.
    Rating,
    /// By creation time.
    CreatedAt,
}

/// Direction of a sort.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Smallest / earliest first.
    Asc,
    /// Largest / latest first.
    Desc,
}

/// A set of independently optional constraints on the spot list.
///
/// `None` always means "no constraint" (or, for the sort fields, "no
/// opinion"); there are no sentinel values such as `"all"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    /// Only spots of this kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    /// Only spots in this region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Minimum rating (1-5) a spot must have.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,
    /// Field to order by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    /// Direction to order in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Only spots created by the current user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mine_only: Option<bool>,
}

impl FilterSet {
    /// The state a cleared search returns to: no constraints, newest first.
    #[must_use]
    pub const fn reset() -> Self {
        Self {
            classification: None,
            region: None,
            min_rating: None,
            sort_by: Some(SortField::CreatedAt),
            sort_order: Some(SortOrder::Desc),
            mine_only: None,
        }
    }

    /// Whether a classification or region constraint is set.
    #[must_use]
    pub const fn has_structural_filter(&self) -> bool {
        self.classification.is_some() || self.region.is_some()
    }
}

/// The structured interpretation of one raw search string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    /// The query after lower-casing, trimming and whitespace collapsing.
    /// Re-parsing this string yields the same result.
    pub normalized: String,
    /// Constraints detected in the query.
    pub filters: FilterSet,
    /// Residual words for fuzzy matching against spot names and
    /// descriptions, in query order.
    pub search_terms: Vec<String>,
    /// A `"locality, state"` string to hand to a forward geocoder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_reference: Option<String>,
}

impl ParsedQuery {
    /// Whether this query clears all filters (empty or whitespace-only
    /// input).
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Merges this interpretation into the caller's current filter state.
    ///
    /// A reset query replaces everything with [`FilterSet::reset`]. Any other
    /// query replaces classification, region and rating floor, keeps the
    /// current sort unless the query expressed one, and never touches the
    /// "mine only" toggle.
    #[must_use]
    pub fn apply_to(&self, current: &FilterSet) -> FilterSet {
        if self.is_reset() {
            return FilterSet::reset();
        }

        FilterSet {
            classification: self.filters.classification,
            region: self.filters.region,
            min_rating: self.filters.min_rating,
            sort_by: self.filters.sort_by.or(current.sort_by),
            sort_order: self.filters.sort_order.or(current.sort_order),
            mine_only: current.mine_only,
        }
    }
}

/// The searchable projection of a stored spot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotListing {
    /// Spot name.
    pub name: String,
    /// Free-text description, if any.
    pub description: Option<String>,
    /// Kind of spot.
    pub classification: Classification,
    /// Assigned region, if one could be determined.
    pub region: Option<Region>,
    /// Rating from 1 to 5.
    pub rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(normalized: &str, filters: FilterSet) -> ParsedQuery {
        ParsedQuery {
            normalized: normalized.to_string(),
            filters,
            search_terms: vec![],
            place_reference: None,
        }
    }

    #[test]
    fn reset_query_restores_default_sort() {
        let current = FilterSet {
            classification: Some(Classification::Bash),
            sort_by: Some(SortField::Name),
            sort_order: Some(SortOrder::Asc),
            mine_only: Some(true),
            ..FilterSet::default()
        };
        let merged = parsed("", FilterSet::reset()).apply_to(&current);
        assert_eq!(merged, FilterSet::reset());
    }

    #[test]
    fn query_without_sort_keeps_current_sort() {
        let current = FilterSet {
            region: Some(Region::Texas),
            sort_by: Some(SortField::Name),
            sort_order: Some(SortOrder::Asc),
            mine_only: Some(true),
            ..FilterSet::default()
        };
        let query = parsed(
            "crawl",
            FilterSet {
                classification: Some(Classification::Crawl),
                ..FilterSet::default()
            },
        );

        let merged = query.apply_to(&current);
        assert_eq!(merged.classification, Some(Classification::Crawl));
        assert_eq!(merged.region, None);
        assert_eq!(merged.sort_by, Some(SortField::Name));
        assert_eq!(merged.sort_order, Some(SortOrder::Asc));
        assert_eq!(merged.mine_only, Some(true));
    }

    #[test]
    fn query_with_sort_overrides_current_sort() {
        let current = FilterSet::reset();
        let query = parsed(
            "oldest",
            FilterSet {
                sort_by: Some(SortField::CreatedAt),
                sort_order: Some(SortOrder::Asc),
                ..FilterSet::default()
            },
        );
        assert_eq!(query.apply_to(&current).sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn structural_filter_means_kind_or_region() {
        assert!(!FilterSet::default().has_structural_filter());
        assert!(!FilterSet::reset().has_structural_filter());
        let rated = FilterSet {
            min_rating: Some(5),
            ..FilterSet::default()
        };
        assert!(!rated.has_structural_filter());
        let by_region = FilterSet {
            region: Some(Region::Texas),
            ..FilterSet::default()
        };
        assert!(by_region.has_structural_filter());
        let by_kind = FilterSet {
            classification: Some(Classification::Race),
            ..FilterSet::default()
        };
        assert!(by_kind.has_structural_filter());
    }

    #[test]
    fn empty_filter_set_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&FilterSet::default()).unwrap(), "{}");
    }

    #[test]
    fn sort_fields_use_camel_case() {
        assert_eq!(SortField::CreatedAt.to_string(), "createdAt");
        assert_eq!(
            serde_json::to_string(&SortField::CreatedAt).unwrap(),
            "\"createdAt\""
        );
        assert_eq!(SortOrder::Desc.as_ref(), "desc");
    }
}
