//! US state table and region resolution.
//!
//! A single canonical table ([`STATES`]) maps every state (plus DC) to a
//! [`Region`]. Two thin lookups sit on top of it:
//!
//! - [`resolve_from_query_text`] for noisy free text: ordered
//!   first-match-wins containment over region phrases, city nicknames and
//!   the state table.
//! - [`resolve_from_administrative_name`] for a geocoder's isolated state
//!   field: case-insensitive exact match only.

use std::borrow::Cow;
use std::sync::LazyLock;

use spot_finder_search_models::Region;

use crate::keywords::KeywordTable;

/// One row of the canonical state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateRecord {
    /// Lower-case full name (e.g. `"new york"`).
    pub name: &'static str,
    /// Lower-case two-letter postal abbreviation.
    pub abbr: &'static str,
    /// Region the state belongs to.
    pub region: Region,
}

const fn state(name: &'static str, abbr: &'static str, region: Region) -> StateRecord {
    StateRecord { name, abbr, region }
}

/// The 50 states plus DC.
///
/// Rows are ordered so that no earlier full name is contained in a later
/// one ("west virginia" precedes "virginia", "arkansas" precedes
/// "kansas"), which keeps free-text containment unambiguous.
pub static STATES: &[StateRecord] = &[
    state("california", "ca", Region::California),
    state("texas", "tx", Region::Texas),
    state("florida", "fl", Region::Florida),
    state("washington", "wa", Region::PacificNorthwest),
    state("oregon", "or", Region::PacificNorthwest),
    state("idaho", "id", Region::PacificNorthwest),
    state("montana", "mt", Region::PacificNorthwest),
    state("maine", "me", Region::Northeast),
    state("new hampshire", "nh", Region::Northeast),
    state("vermont", "vt", Region::Northeast),
    state("massachusetts", "ma", Region::Northeast),
    state("rhode island", "ri", Region::Northeast),
    state("connecticut", "ct", Region::Northeast),
    state("new york", "ny", Region::Northeast),
    state("new jersey", "nj", Region::Northeast),
    state("pennsylvania", "pa", Region::Northeast),
    state("delaware", "de", Region::Northeast),
    state("maryland", "md", Region::Northeast),
    state("district of columbia", "dc", Region::Northeast),
    state("west virginia", "wv", Region::Southeast),
    state("virginia", "va", Region::Southeast),
    state("north carolina", "nc", Region::Southeast),
    state("south carolina", "sc", Region::Southeast),
    state("georgia", "ga", Region::Southeast),
    state("alabama", "al", Region::Southeast),
    state("mississippi", "ms", Region::Southeast),
    state("tennessee", "tn", Region::Southeast),
    state("kentucky", "ky", Region::Southeast),
    state("louisiana", "la", Region::Southeast),
    state("arkansas", "ar", Region::Southeast),
    state("ohio", "oh", Region::Midwest),
    state("michigan", "mi", Region::Midwest),
    state("indiana", "in", Region::Midwest),
    state("illinois", "il", Region::Midwest),
    state("wisconsin", "wi", Region::Midwest),
    state("minnesota", "mn", Region::Midwest),
    state("iowa", "ia", Region::Midwest),
    state("missouri", "mo", Region::Midwest),
    state("north dakota", "nd", Region::Midwest),
    state("south dakota", "sd", Region::Midwest),
    state("nebraska", "ne", Region::Midwest),
    state("kansas", "ks", Region::Midwest),
    state("arizona", "az", Region::Southwest),
    state("new mexico", "nm", Region::Southwest),
    state("nevada", "nv", Region::Southwest),
    state("utah", "ut", Region::Southwest),
    state("colorado", "co", Region::Southwest),
    state("oklahoma", "ok", Region::Southwest),
    state("wyoming", "wy", Region::Southwest),
    state("alaska", "ak", Region::Other),
    state("hawaii", "hi", Region::Other),
];

/// Inhabited US territories: recognized as US, but with no region of
/// their own.
static US_TERRITORIES: &[(&str, &str)] = &[
    ("puerto rico", "pr"),
    ("guam", "gu"),
    ("united states virgin islands", "vi"),
    ("us virgin islands", "vi"),
    ("american samoa", "as"),
    ("northern mariana islands", "mp"),
];

/// Abbreviations that are also everyday English words. They are never
/// used to detect a region in free text.
static AMBIGUOUS_ABBREVIATIONS: &[&str] = &["in", "me", "or", "oh", "hi", "ok", "id", "la"];

/// Region names and informal spellings of them.
static REGION_PHRASES: &[(&str, Region)] = &[
    ("northeast", Region::Northeast),
    ("north east", Region::Northeast),
    ("new england", Region::Northeast),
    ("southeast", Region::Southeast),
    ("south east", Region::Southeast),
    ("midwest", Region::Midwest),
    ("mid west", Region::Midwest),
    ("southwest", Region::Southwest),
    ("south west", Region::Southwest),
    ("west coast", Region::WestCoast),
    ("westcoast", Region::WestCoast),
    ("pacific northwest", Region::PacificNorthwest),
    ("pnw", Region::PacificNorthwest),
];

/// Cities and nicknames people type instead of a state.
///
/// Checked before the state table so that "washington dc" is not read as
/// Washington state.
static CITY_ALIASES: &[(&str, Region)] = &[
    ("washington dc", Region::Northeast),
    ("washington d.c", Region::Northeast),
    ("cali", Region::California),
    ("socal", Region::California),
    ("norcal", Region::California),
    ("seattle", Region::PacificNorthwest),
    ("portland", Region::PacificNorthwest),
    ("boston", Region::Northeast),
    ("philly", Region::Northeast),
    ("atlanta", Region::Southeast),
    ("detroit", Region::Midwest),
    ("chicago", Region::Midwest),
    ("phoenix", Region::Southwest),
    ("las vegas", Region::Southwest),
    ("vegas", Region::Southwest),
    ("denver", Region::Southwest),
];

/// The full free-text alias sequence: region phrases, then cities, then
/// each state's name followed by its abbreviation.
static REGION_ALIASES: LazyLock<Vec<(&'static str, Region)>> = LazyLock::new(|| {
    let mut aliases =
        Vec::with_capacity(REGION_PHRASES.len() + CITY_ALIASES.len() + 2 * STATES.len());
    aliases.extend_from_slice(REGION_PHRASES);
    aliases.extend_from_slice(CITY_ALIASES);
    for record in STATES {
        aliases.push((record.name, record.region));
        if !AMBIGUOUS_ABBREVIATIONS.contains(&record.abbr) {
            aliases.push((record.abbr, record.region));
        }
    }
    aliases
});

/// The ordered alias table used for free-text region detection.
#[must_use]
pub fn alias_table() -> KeywordTable<'static, Region> {
    KeywordTable::new(REGION_ALIASES.as_slice())
}

/// Returns `true` if `word` is exactly one of the free-text region
/// aliases.
#[must_use]
pub fn is_region_alias(word: &str) -> bool {
    alias_table().contains_key(word)
}

/// Resolves a region from normalized free text.
///
/// Tries the alias table first, then the canonical region display names.
/// [`Region::Other`] is never inferred from free text.
#[must_use]
pub fn resolve_from_query_text(normalized_query: &str) -> Option<Region> {
    resolve_with(&alias_table(), normalized_query)
}

/// [`resolve_from_query_text`] against an arbitrary alias table.
#[must_use]
pub fn resolve_with(aliases: &KeywordTable<'_, Region>, normalized_query: &str) -> Option<Region> {
    match_with(aliases, normalized_query).map(|(_, region)| region)
}

/// Like [`resolve_from_query_text`], but also returns the alias or
/// lower-cased region name that matched.
#[must_use]
pub fn match_query_text(normalized_query: &str) -> Option<(Cow<'static, str>, Region)> {
    match_with(&alias_table(), normalized_query)
}

/// [`match_query_text`] against an arbitrary alias table.
#[must_use]
pub fn match_with<'a>(
    aliases: &KeywordTable<'a, Region>,
    normalized_query: &str,
) -> Option<(Cow<'a, str>, Region)> {
    if let Some((alias, region)) = aliases.first_match_entry(normalized_query) {
        return Some((Cow::Borrowed(alias), region));
    }

    Region::all()
        .iter()
        .copied()
        .filter(|region| *region != Region::Other)
        .find_map(|region| {
            let name = region.name().to_lowercase();
            normalized_query
                .contains(&name)
                .then(|| (Cow::Owned(name), region))
        })
}

/// Resolves a region from an isolated state name or abbreviation, as
/// returned in a reverse geocoder's administrative-area field.
///
/// Matching is exact and case-insensitive. Returns:
/// - the state's region for any of the 50 states or DC,
/// - [`Region::Other`] for a US territory,
/// - `None` for anything else (including non-US provinces).
#[must_use]
pub fn resolve_from_administrative_name(state_name_or_abbr: &str) -> Option<Region> {
    let key = state_name_or_abbr
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if key.is_empty() {
        return None;
    }

    if let Some(record) = STATES.iter().find(|s| s.name == key || s.abbr == key) {
        return Some(record.region);
    }

    US_TERRITORIES
        .iter()
        .any(|(name, abbr)| *name == key || *abbr == key)
        .then_some(Region::Other)
}

/// Iterates the 50 states (the state table without DC).
pub fn fifty_states() -> impl Iterator<Item = &'static StateRecord> {
    STATES.iter().filter(|s| s.abbr != "dc")
}
