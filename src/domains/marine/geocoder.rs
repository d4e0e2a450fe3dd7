//! Nominatim geocoding client.
//!
//! Turns a free-text location into coordinates by querying the public
//! Nominatim search endpoint. Single-shot: no retry, no caching.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::core::config::MarineConfig;

use super::error::MarineError;

/// A latitude/longitude pair as returned by the geocoder.
///
/// No range validation beyond what the upstream service performs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One candidate place in a Nominatim search response.
///
/// Nominatim serves coordinates as numeric strings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodePlace {
    lat: String,
    lon: String,
}

/// HTTP client for the geocoding service.
pub struct GeocoderClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocoderClient {
    /// Build a client from the marine configuration.
    ///
    /// The reference implementation set no timeout on geocoding calls; a
    /// bounded timeout is applied here anyway since an unbounded wait on a
    /// public service is a reliability hazard.
    pub fn new(config: &MarineConfig) -> Result<Self, MarineError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.geocoder_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a location name to coordinates.
    ///
    /// Returns `Ok(None)` when the service has no candidate for the query
    /// (a soft failure the caller turns into a sentence). A non-success
    /// status or an unparseable payload is a hard failure.
    pub async fn geocode(&self, location: &str) -> Result<Option<Coordinates>, MarineError> {
        let location = location.trim();
        debug!("Geocoding location: {location}");

        let places: Vec<GeocodePlace> = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("q", location), ("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        first_coordinates(&places)
    }
}

/// Extract the coordinates of the first candidate, if any.
fn first_coordinates(places: &[GeocodePlace]) -> Result<Option<Coordinates>, MarineError> {
    match places.first() {
        Some(place) => Ok(Some(Coordinates {
            latitude: place.lat.parse()?,
            longitude: place.lon.parse()?,
        })),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places_from(json: &str) -> Vec<GeocodePlace> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_coordinates_takes_first_candidate() {
        let places = places_from(
            r#"[
                {"lat": "42.3554334", "lon": "-71.0605616", "display_name": "Boston"},
                {"lat": "32.44", "lon": "-90.15", "display_name": "Boston, MS"}
            ]"#,
        );
        let coords = first_coordinates(&places).unwrap().unwrap();
        assert_eq!(coords.latitude, 42.3554334);
        assert_eq!(coords.longitude, -71.0605616);
    }

    #[test]
    fn test_first_coordinates_empty_response_is_absent() {
        let places = places_from("[]");
        assert!(first_coordinates(&places).unwrap().is_none());
    }

    #[test]
    fn test_first_coordinates_rejects_non_numeric() {
        let places = places_from(r#"[{"lat": "not-a-number", "lon": "-71.0"}]"#);
        assert!(first_coordinates(&places).is_err());
    }

    // Network test (requires internet access, run with --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_geocode_real_location() {
        let client = GeocoderClient::new(&MarineConfig::default()).unwrap();
        let coords = client.geocode(" Boston, MA ").await.unwrap().unwrap();
        assert!(coords.latitude > 42.0 && coords.latitude < 43.0);
        assert!(coords.longitude < -70.0 && coords.longitude > -72.0);
    }
}
