#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding gateway for spot search.
//!
//! Defines the [`Geocoder`] boundary the search engine talks to, a
//! [`nominatim`] implementation of it configured from an embedded TOML file
//! (see [`service_registry`]), and the [`resolve`] layer that combines a
//! parsed query or a raw coordinate pair with gateway results.
//!
//! Gateway methods return [`GeocodeError`] on failure, but the [`resolve`]
//! functions never do: a failed or empty geocode is logged and treated the
//! same as "nothing found".

pub mod nominatim;
pub mod resolve;
pub mod service_registry;

use thiserror::Error;

pub use resolve::{SearchResolution, region_for_coordinates, resolve_search};

/// Result of a forward geocode: where a place is.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardGeocode {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Full place name as returned by the provider.
    pub display_name: Option<String>,
}

/// Result of a reverse geocode: what administrative area a point is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseGeocode {
    /// First-level administrative area (a US state name, a Canadian
    /// province, ...).
    pub administrative_area: Option<String>,
    /// Lower-case ISO 3166-1 alpha-2 country code.
    pub country_code: Option<String>,
}

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Unexpected HTTP status: {status}")]
    Status {
        /// Status code returned by the provider.
        status: u16,
    },

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Service configuration is invalid.
    #[error("Config error: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
}

/// A forward and reverse geocoding provider.
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Looks up the coordinates of a free-form place such as
    /// `"florence, or"`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the request or response parsing fails.
    async fn forward_geocode(&self, place: &str) -> Result<Option<ForwardGeocode>, GeocodeError>;

    /// Looks up the administrative area containing a point.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the request or response parsing fails.
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<ReverseGeocode>, GeocodeError>;
}
