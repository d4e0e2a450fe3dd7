//! Marea tide-prediction client.
//!
//! Fetches one day of hourly tide predictions for a coordinate pair. The API
//! token is injected at construction from the credentials configuration so
//! call sites never touch ambient process state.

use std::time::Duration;

use tracing::debug;

use crate::core::config::{CredentialsConfig, MarineConfig};

use super::error::MarineError;

/// Header carrying the Marea API token.
pub const MAREA_TOKEN_HEADER: &str = "x-marea-api-token";

/// Prediction window, in minutes (one day).
const TIDE_DURATION_MINUTES: u32 = 1440;

/// Sample spacing for height predictions, in minutes.
const TIDE_INTERVAL_MINUTES: u32 = 60;

/// Global tide model used for predictions.
const TIDE_MODEL: &str = "FES2014";

/// Vertical datum heights are referenced to.
const TIDE_DATUM: &str = "MSL";

/// Tide predictions for one location.
///
/// Both fields pass through from the upstream service verbatim: `extremes`
/// holds the tide turning points, `heights` the time-indexed samples. No
/// schema is imposed beyond both keys being present in the response.
#[derive(Debug, Clone, PartialEq)]
pub struct TideData {
    pub extremes: serde_json::Value,
    pub heights: serde_json::Value,
}

/// HTTP client for the tide-prediction service.
pub struct TideClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl TideClient {
    /// Build a client with the injected API token.
    ///
    /// A missing token is not an error here: the request is still sent with
    /// an empty header value, matching upstream behavior for unauthenticated
    /// calls (configuration loading already warned about it).
    pub fn new(
        config: &MarineConfig,
        credentials: &CredentialsConfig,
    ) -> Result<Self, MarineError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.tide_base_url.trim_end_matches('/').to_string(),
            token: credentials.marea_api_token.clone(),
        })
    }

    /// Fetch tide extremes and hourly heights for a coordinate pair.
    ///
    /// Returns `Ok(None)` when the response lacks the `extremes` or
    /// `heights` key (a soft failure the caller turns into a sentence). A
    /// non-success status or timeout is a hard failure.
    pub async fn fetch_tides(&self, lat: f64, lon: f64) -> Result<Option<TideData>, MarineError> {
        debug!("Fetching tides for ({lat}, {lon})");

        let payload: serde_json::Value = self
            .http
            .get(format!("{}/v2/tides", self.base_url))
            .query(&[
                ("duration", TIDE_DURATION_MINUTES.to_string()),
                ("interval", TIDE_INTERVAL_MINUTES.to_string()),
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("model", TIDE_MODEL.to_string()),
                ("datum", TIDE_DATUM.to_string()),
            ])
            .header(MAREA_TOKEN_HEADER, self.token.as_deref().unwrap_or(""))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(extract_tide_data(payload))
    }
}

/// Pull `extremes` and `heights` out of a response payload.
///
/// Absent when either key is missing; everything else in the payload is
/// discarded.
fn extract_tide_data(payload: serde_json::Value) -> Option<TideData> {
    let extremes = payload.get("extremes")?.clone();
    let heights = payload.get("heights")?.clone();
    Some(TideData { extremes, heights })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_passes_both_keys_through() {
        let payload = json!({
            "extremes": [{"datetime": "2026-08-07T03:12:00+00:00", "state": "HIGH TIDE"}],
            "heights": [{"datetime": "2026-08-07T00:00:00+00:00", "height": 1.02}],
            "origin": {"latitude": 42.33, "longitude": -71.04}
        });
        let data = extract_tide_data(payload).unwrap();
        assert_eq!(data.extremes[0]["state"], "HIGH TIDE");
        assert_eq!(data.heights[0]["height"], 1.02);
    }

    #[test]
    fn test_extract_missing_heights_is_absent() {
        let payload = json!({"extremes": []});
        assert!(extract_tide_data(payload).is_none());
    }

    #[test]
    fn test_extract_missing_extremes_is_absent() {
        let payload = json!({"heights": []});
        assert!(extract_tide_data(payload).is_none());
    }

    #[test]
    fn test_extract_empty_object_is_absent() {
        assert!(extract_tide_data(json!({})).is_none());
    }

    #[test]
    fn test_client_accepts_missing_token() {
        let credentials = CredentialsConfig {
            marea_api_token: None,
        };
        assert!(TideClient::new(&MarineConfig::default(), &credentials).is_ok());
    }
}
