#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spot taxonomy and search filter types.
//!
//! Defines the closed set of spot classifications and map regions shared by
//! the query interpreter, the geocoding layer and any UI that renders the
//! results. Filter and parsed-query types live in [`filter`].

pub mod filter;

pub use filter::{FilterSet, ParsedQuery, SortField, SortOrder, SpotListing};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The kind of hobby location a spot represents.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Classification {
    /// Open ground for free-form driving and jumping.
    Bash,
    /// Purpose-built race track.
    Race,
    /// Rock crawling and trail area.
    Crawl,
    /// Hobby shop selling parts and kits.
    Hobby,
    /// Field for flying aircraft.
    Airfield,
    /// Pond or lake for boats.
    Boat,
}

impl Classification {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Bash,
            Self::Race,
            Self::Crawl,
            Self::Hobby,
            Self::Airfield,
            Self::Boat,
        ]
    }

    /// Human-readable label shown in filter pickers and map popups.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bash => "Bash Spot",
            Self::Race => "Race Track",
            Self::Crawl => "Crawl Area",
            Self::Hobby => "Hobby Shop",
            Self::Airfield => "Air Field",
            Self::Boat => "Boat Pond",
        }
    }

    /// Marker color as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Bash => "#ef4444",
            Self::Race => "#3b82f6",
            Self::Crawl => "#22c55e",
            Self::Hobby => "#f97316",
            Self::Airfield => "#8b5cf6",
            Self::Boat => "#06b6d4",
        }
    }
}

/// A named geographic grouping used to filter spots.
///
/// Serialized (and displayed) by its human-readable name, e.g.
/// `"Pacific Northwest"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    /// New England, the mid-Atlantic states and DC.
    Northeast,
    /// The South from Virginia to Arkansas.
    Southeast,
    /// Great Lakes and Plains states.
    Midwest,
    /// Desert and mountain states.
    Southwest,
    /// Coastal grouping used when a query names the west coast itself.
    #[serde(rename = "West Coast")]
    #[strum(serialize = "West Coast")]
    WestCoast,
    /// Washington, Oregon, Idaho and Montana.
    #[serde(rename = "Pacific Northwest")]
    #[strum(serialize = "Pacific Northwest")]
    PacificNorthwest,
    /// California.
    California,
    /// Texas.
    Texas,
    /// Florida.
    Florida,
    /// A recognized US location with no finer-grained grouping.
    Other,
}

impl Region {
    /// Returns all variants of this enum, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Northeast,
            Self::Southeast,
            Self::Midwest,
            Self::Southwest,
            Self::WestCoast,
            Self::PacificNorthwest,
            Self::California,
            Self::Texas,
            Self::Florida,
            Self::Other,
        ]
    }

    /// Canonical display name (e.g. `"West Coast"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Northeast => "Northeast",
            Self::Southeast => "Southeast",
            Self::Midwest => "Midwest",
            Self::Southwest => "Southwest",
            Self::WestCoast => "West Coast",
            Self::PacificNorthwest => "Pacific Northwest",
            Self::California => "California",
            Self::Texas => "Texas",
            Self::Florida => "Florida",
            Self::Other => "Other",
        }
    }

    /// Map center and zoom level to show when this region is selected.
    #[must_use]
    pub const fn map_view(self) -> MapView {
        let (latitude, longitude, zoom) = match self {
            Self::Northeast => (42.5, -73.5, 6),
            Self::Southeast => (33.5, -84.0, 5),
            Self::Midwest => (41.5, -89.0, 5),
            Self::Southwest => (34.0, -111.0, 5),
            Self::WestCoast => (37.5, -122.0, 5),
            Self::PacificNorthwest => (46.5, -122.5, 6),
            Self::California => (36.5, -119.5, 6),
            Self::Texas => (31.0, -99.5, 6),
            Self::Florida => (28.0, -82.5, 6),
            Self::Other => (39.8, -98.6, 4),
        };
        MapView {
            latitude,
            longitude,
            zoom,
        }
    }
}

/// A map viewport: center point plus zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// Center latitude (WGS84).
    pub latitude: f64,
    /// Center longitude (WGS84).
    pub longitude: f64,
    /// Web-map zoom level.
    pub zoom: u8,
}
