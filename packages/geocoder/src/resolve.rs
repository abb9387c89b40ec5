//! Combines query interpretation and region resolution with a [`Geocoder`].
//!
//! Neither function here can fail. Gateway errors are logged at `warn` and
//! handled exactly like an empty result.

use serde::Serialize;
use spot_finder_search::{QueryInterpreter, resolve_from_administrative_name};
use spot_finder_search_models::{MapView, ParsedQuery, Region};

use crate::{Geocoder, ReverseGeocode};

/// Map zoom used when centering on a geocoded place.
pub const PLACE_ZOOM: u8 = 9;

/// Country code for which an unrecognized administrative area still counts
/// as [`Region::Other`].
const HOME_COUNTRY: &str = "us";

/// A place reference that the gateway located.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlace {
    /// The `"locality, state"` string that was geocoded.
    pub reference: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Provider's full name for the place, if given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Outcome of [`resolve_search`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResolution {
    /// The interpretation to apply. When `place` is `None` this never
    /// carries a place reference.
    pub query: ParsedQuery,
    /// Where to center the map, if the query named a locatable place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<ResolvedPlace>,
}

impl SearchResolution {
    /// The viewport to show for this search: the geocoded place at
    /// [`PLACE_ZOOM`], else the region filter's view, else `None` (leave the
    /// map where it is).
    #[must_use]
    pub fn map_view(&self) -> Option<MapView> {
        self.place
            .as_ref()
            .map(|place| MapView {
                latitude: place.latitude,
                longitude: place.longitude,
                zoom: PLACE_ZOOM,
            })
            .or_else(|| self.query.filters.region.map(Region::map_view))
    }
}

/// Interprets `raw_query` and, if it names a place, geocodes it.
///
/// On a successful geocode the result keeps the place interpretation: no
/// region filter, place words excluded from the search terms. If the place
/// cannot be located (no result or a gateway error) the query is
/// re-interpreted as if it named no place, so region and terms come from
/// the full text.
pub async fn resolve_search(geocoder: &dyn Geocoder, raw_query: &str) -> SearchResolution {
    resolve_search_with(geocoder, QueryInterpreter::new(), raw_query).await
}

/// [`resolve_search`] with a caller-configured interpreter.
pub async fn resolve_search_with(
    geocoder: &dyn Geocoder,
    interpreter: QueryInterpreter,
    raw_query: &str,
) -> SearchResolution {
    let query = interpreter.parse(raw_query);
    let Some(reference) = query.place_reference.clone() else {
        return SearchResolution { query, place: None };
    };

    match geocoder.forward_geocode(&reference).await {
        Ok(Some(found)) => {
            log::debug!(
                "Located {reference:?} at ({}, {})",
                found.latitude,
                found.longitude
            );
            SearchResolution {
                query,
                place: Some(ResolvedPlace {
                    reference,
                    latitude: found.latitude,
                    longitude: found.longitude,
                    display_name: found.display_name,
                }),
            }
        }
        Ok(None) => {
            log::debug!("No geocode result for {reference:?}");
            without_place(interpreter, raw_query)
        }
        Err(e) => {
            log::warn!("Geocoding {reference:?} failed: {e}");
            without_place(interpreter, raw_query)
        }
    }
}

fn without_place(interpreter: QueryInterpreter, raw_query: &str) -> SearchResolution {
    SearchResolution {
        query: interpreter.without_place_extraction().parse(raw_query),
        place: None,
    }
}

/// Determines the [`Region`] containing a point.
///
/// Returns `None` when the gateway fails, finds nothing, or places the
/// point outside the United States.
pub async fn region_for_coordinates(
    geocoder: &dyn Geocoder,
    latitude: f64,
    longitude: f64,
) -> Option<Region> {
    match geocoder.reverse_geocode(latitude, longitude).await {
        Ok(Some(reverse)) => region_from_reverse(&reverse),
        Ok(None) => None,
        Err(e) => {
            log::warn!("Reverse geocoding ({latitude}, {longitude}) failed: {e}");
            None
        }
    }
}

/// Maps a reverse-geocode result to a [`Region`]. A US result whose
/// administrative area is unrecognized or missing maps to
/// [`Region::Other`].
#[must_use]
pub fn region_from_reverse(reverse: &ReverseGeocode) -> Option<Region> {
    reverse
        .administrative_area
        .as_deref()
        .and_then(resolve_from_administrative_name)
        .or_else(|| {
            reverse
                .country_code
                .as_deref()
                .is_some_and(|code| code.eq_ignore_ascii_case(HOME_COUNTRY))
                .then_some(Region::Other)
        })
}
