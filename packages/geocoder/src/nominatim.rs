//! Nominatim / OpenStreetMap geocoder client.
//!
//! The public instance allows **1 request per second** and requires an
//! identifying `User-Agent`. Each interactive search issues at most one
//! request.
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/> and
//! <https://nominatim.org/release-docs/develop/api/Reverse/>.

use std::time::Duration;

use crate::service_registry::GeocodingService;
use crate::{ForwardGeocode, GeocodeError, Geocoder, ReverseGeocode};

/// [`Geocoder`] backed by a Nominatim-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    service: GeocodingService,
}

impl NominatimClient {
    /// Builds a client for `service`, setting its user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn new(service: GeocodingService) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(service.user_agent.clone())
            .timeout(Duration::from_secs(service.timeout_secs))
            .build()?;
        Ok(Self { client, service })
    }

    /// Builds a client from the embedded service definition plus
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn from_env() -> Result<Self, GeocodeError> {
        Self::new(GeocodingService::from_env()?)
    }

    /// The service this client talks to.
    #[must_use]
    pub const fn service(&self) -> &GeocodingService {
        &self.service
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, GeocodeError> {
        let resp = self.client.get(url).query(query).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }
        if !status.is_success() {
            return Err(GeocodeError::Status {
                status: status.as_u16(),
            });
        }

        Ok(resp.json().await?)
    }
}

#[async_trait::async_trait]
impl Geocoder for NominatimClient {
    async fn forward_geocode(&self, place: &str) -> Result<Option<ForwardGeocode>, GeocodeError> {
        log::debug!("Nominatim search: {place}");
        let body = self
            .get_json(
                &self.service.search_url,
                &[
                    ("q", place),
                    ("countrycodes", self.service.country_codes.as_str()),
                    ("format", "json"),
                    ("limit", "1"),
                ],
            )
            .await?;
        parse_search_response(&body)
    }

    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<ReverseGeocode>, GeocodeError> {
        log::debug!("Nominatim reverse: ({latitude}, {longitude})");
        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let zoom = self.service.reverse_zoom.to_string();
        let body = self
            .get_json(
                &self.service.reverse_url,
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("zoom", zoom.as_str()),
                    ("addressdetails", "1"),
                    ("format", "json"),
                ],
            )
            .await?;
        parse_reverse_response(&body)
    }
}

/// Parses a Nominatim search response (an array of candidates, best first).
fn parse_search_response(
    body: &serde_json::Value,
) -> Result<Option<ForwardGeocode>, GeocodeError> {
    let results = body.as_array().ok_or_else(|| GeocodeError::Parse {
        message: "Nominatim response is not an array".to_string(),
    })?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let lat = coordinate(first, "lat")?;
    let lon = coordinate(first, "lon")?;
    let display_name = first["display_name"].as_str().map(String::from);

    Ok(Some(ForwardGeocode {
        latitude: lat,
        longitude: lon,
        display_name,
    }))
}

/// Nominatim returns coordinates as strings; accept plain numbers too.
fn coordinate(result: &serde_json::Value, key: &str) -> Result<f64, GeocodeError> {
    let value = &result[key];
    value
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .or_else(|| value.as_f64())
        .ok_or_else(|| GeocodeError::Parse {
            message: format!("Missing {key} in Nominatim response"),
        })
}

/// Parses a Nominatim reverse response. A point in open ocean yields
/// `{"error": "Unable to geocode"}`, which maps to `None`.
fn parse_reverse_response(
    body: &serde_json::Value,
) -> Result<Option<ReverseGeocode>, GeocodeError> {
    let object = body.as_object().ok_or_else(|| GeocodeError::Parse {
        message: "Nominatim reverse response is not an object".to_string(),
    })?;

    if object.contains_key("error") {
        return Ok(None);
    }

    let address = &body["address"];
    let administrative_area = address["state"]
        .as_str()
        .or_else(|| address["province"].as_str())
        .or_else(|| address["territory"].as_str())
        .map(String::from);
    let country_code = address["country_code"].as_str().map(str::to_lowercase);

    Ok(Some(ReverseGeocode {
        administrative_area,
        country_code,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_result() {
        let body = serde_json::json!([{
            "lat": "43.9826",
            "lon": "-124.0998",
            "display_name": "Florence, Lane County, Oregon, United States"
        }]);
        let result = parse_search_response(&body).unwrap().unwrap();
        assert!((result.latitude - 43.9826).abs() < 1e-4);
        assert!((result.longitude - -124.0998).abs() < 1e-4);
        assert_eq!(
            result.display_name.as_deref(),
            Some("Florence, Lane County, Oregon, United States")
        );
    }

    #[test]
    fn parses_numeric_coordinates() {
        let body = serde_json::json!([{ "lat": 30.5, "lon": -97.25 }]);
        let result = parse_search_response(&body).unwrap().unwrap();
        assert!((result.latitude - 30.5).abs() < f64::EPSILON);
        assert!(result.display_name.is_none());
    }

    #[test]
    fn parses_search_empty() {
        let body = serde_json::json!([]);
        assert!(parse_search_response(&body).unwrap().is_none());
    }

    #[test]
    fn search_result_without_lat_is_an_error() {
        let body = serde_json::json!([{ "lon": "-124.0998" }]);
        let err = parse_search_response(&body).unwrap_err();
        assert!(err.to_string().contains("lat"));
    }

    #[test]
    fn search_response_must_be_array() {
        let body = serde_json::json!({ "lat": "1", "lon": "2" });
        assert!(matches!(
            parse_search_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[test]
    fn parses_reverse_result() {
        let body = serde_json::json!({
            "display_name": "Lane County, Oregon, United States",
            "address": {
                "county": "Lane County",
                "state": "Oregon",
                "country": "United States",
                "country_code": "us"
            }
        });
        let result = parse_reverse_response(&body).unwrap().unwrap();
        assert_eq!(result.administrative_area.as_deref(), Some("Oregon"));
        assert_eq!(result.country_code.as_deref(), Some("us"));
    }

    #[test]
    fn reverse_falls_back_to_province() {
        let body = serde_json::json!({
            "address": { "province": "Ontario", "country_code": "CA" }
        });
        let result = parse_reverse_response(&body).unwrap().unwrap();
        assert_eq!(result.administrative_area.as_deref(), Some("Ontario"));
        assert_eq!(result.country_code.as_deref(), Some("ca"));
    }

    #[test]
    fn reverse_error_is_not_found() {
        let body = serde_json::json!({ "error": "Unable to geocode" });
        assert!(parse_reverse_response(&body).unwrap().is_none());
    }

    #[test]
    fn reverse_without_address_has_no_area() {
        let body = serde_json::json!({ "display_name": "Somewhere" });
        let result = parse_reverse_response(&body).unwrap().unwrap();
        assert!(result.administrative_area.is_none());
        assert!(result.country_code.is_none());
    }

    #[test]
    fn client_builds_from_embedded_service() {
        let service = GeocodingService::from_toml(include_str!("../services/nominatim.toml"))
            .unwrap();
        let client = NominatimClient::new(service).unwrap();
        assert_eq!(client.service().id, "nominatim");
    }
}
