//! Geocoding service configuration.
//!
//! The provider is defined in `services/nominatim.toml`, embedded at
//! compile time. Deployments can point at a self-hosted instance through
//! environment variables without rebuilding:
//!
//! - `SPOT_FINDER_GEOCODER_SEARCH_URL`
//! - `SPOT_FINDER_GEOCODER_REVERSE_URL`
//! - `SPOT_FINDER_GEOCODER_USER_AGENT`

use serde::Deserialize;

use crate::GeocodeError;

/// Environment variable overriding [`GeocodingService::search_url`].
pub const SEARCH_URL_ENV: &str = "SPOT_FINDER_GEOCODER_SEARCH_URL";
/// Environment variable overriding [`GeocodingService::reverse_url`].
pub const REVERSE_URL_ENV: &str = "SPOT_FINDER_GEOCODER_REVERSE_URL";
/// Environment variable overriding [`GeocodingService::user_agent`].
pub const USER_AGENT_ENV: &str = "SPOT_FINDER_GEOCODER_USER_AGENT";

/// A Nominatim-compatible geocoding service loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeocodingService {
    /// Unique identifier (e.g., `"nominatim"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Forward search endpoint.
    pub search_url: String,
    /// Reverse lookup endpoint.
    pub reverse_url: String,
    /// `User-Agent` header sent with every request. Required by the
    /// public Nominatim usage policy.
    pub user_agent: String,
    /// Comma-separated ISO country codes forward searches are limited to.
    pub country_codes: String,
    /// Reverse lookup detail level (5 = state).
    #[serde(default = "default_reverse_zoom")]
    pub reverse_zoom: u8,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_reverse_zoom() -> u8 {
    5
}

const fn default_timeout_secs() -> u64 {
    10
}

const NOMINATIM_TOML: &str = include_str!("../services/nominatim.toml");

impl GeocodingService {
    /// Parses a service definition from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Config`] if the TOML is malformed or a
    /// required field is missing or empty.
    pub fn from_toml(toml_str: &str) -> Result<Self, GeocodeError> {
        let service: Self = toml::de::from_str(toml_str).map_err(|e| GeocodeError::Config {
            message: format!("invalid geocoding service TOML: {e}"),
        })?;
        service.validate()?;
        Ok(service)
    }

    /// The embedded default service with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Config`] if the embedded TOML is invalid or
    /// an override is empty.
    pub fn from_env() -> Result<Self, GeocodeError> {
        let mut service = Self::from_toml(NOMINATIM_TOML)?;
        service.apply_overrides(|key| std::env::var(key).ok());
        service.validate()?;
        Ok(service)
    }

    /// Replaces URL and user-agent fields with values returned by `lookup`
    /// for the corresponding environment variable names.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for (key, field) in [
            (SEARCH_URL_ENV, &mut self.search_url),
            (REVERSE_URL_ENV, &mut self.reverse_url),
            (USER_AGENT_ENV, &mut self.user_agent),
        ] {
            if let Some(value) = lookup(key) {
                log::debug!("Geocoder override {key}={value}");
                *field = value;
            }
        }
    }

    fn validate(&self) -> Result<(), GeocodeError> {
        for (field, value) in [
            ("id", &self.id),
            ("search_url", &self.search_url),
            ("reverse_url", &self.reverse_url),
            ("user_agent", &self.user_agent),
        ] {
            if value.trim().is_empty() {
                return Err(GeocodeError::Config {
                    message: format!("geocoding service field `{field}` is empty"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_service_parses() {
        let service = GeocodingService::from_toml(NOMINATIM_TOML).unwrap();
        assert_eq!(service.id, "nominatim");
        assert!(service.search_url.starts_with("https://"));
        assert!(service.reverse_url.ends_with("/reverse"));
        assert_eq!(service.country_codes, "us");
        assert_eq!(service.reverse_zoom, 5);
        assert!(!service.user_agent.is_empty());
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let service = GeocodingService::from_toml(
            r#"
            id = "local"
            name = "Local"
            search_url = "http://localhost:8080/search"
            reverse_url = "http://localhost:8080/reverse"
            user_agent = "test"
            country_codes = "us"
            "#,
        )
        .unwrap();
        assert_eq!(service.reverse_zoom, 5);
        assert_eq!(service.timeout_secs, 10);
    }

    #[test]
    fn missing_field_is_a_config_error() {
        let err = GeocodingService::from_toml(r#"id = "x""#).unwrap_err();
        assert!(matches!(err, GeocodeError::Config { .. }));
    }

    #[test]
    fn empty_url_is_rejected() {
        let err = GeocodingService::from_toml(
            r#"
            id = "x"
            name = "X"
            search_url = " "
            reverse_url = "http://localhost/reverse"
            user_agent = "test"
            country_codes = "us"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("search_url"));
    }

    #[test]
    fn overrides_replace_only_present_keys() {
        let mut service = GeocodingService::from_toml(NOMINATIM_TOML).unwrap();
        let original_reverse = service.reverse_url.clone();
        service.apply_overrides(|key| {
            (key == SEARCH_URL_ENV).then(|| "http://localhost:8080/search".to_string())
        });
        assert_eq!(service.search_url, "http://localhost:8080/search");
        assert_eq!(service.reverse_url, original_reverse);
    }
}
