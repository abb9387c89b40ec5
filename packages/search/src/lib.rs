#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Search query interpretation for the spot map.
//!
//! Converts an unstructured search string such as
//! `"5 star race tracks in texas"` into a structured [`ParsedQuery`]:
//! filters (classification, region, rating floor, sort), residual words
//! for fuzzy matching, and an optional `"locality, state"` place reference
//! for a forward geocoder. Also maps a reverse geocoder's state name to a
//! [`Region`].
//!
//! Everything here is a pure function over static tables: no I/O, no
//! shared mutable state, and no failure modes. Every input, including the
//! empty string, has a well-defined result.
//!
//! - [`classifier`]: text → [`Classification`]
//! - [`region`]: text or state name → [`Region`]
//! - [`place`]: text → `"locality, state"`
//! - [`interpreter`]: orchestrates the above into a [`ParsedQuery`]
//! - [`matching`]: applies a [`ParsedQuery`] to spot listings

pub mod classifier;
pub mod interpreter;
pub mod keywords;
pub mod matching;
pub mod place;
pub mod region;
pub mod text;

pub use classifier::classify;
pub use interpreter::{QueryInterpreter, TermPolicy, parse};
pub use place::extract_place;
pub use region::{resolve_from_administrative_name, resolve_from_query_text};

pub use spot_finder_search_models::{
    Classification, FilterSet, MapView, ParsedQuery, Region, SortField, SortOrder, SpotListing,
};
