//! Location geocoding tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::core::config::Config;
use crate::domains::marine::{Coordinates, GeocoderClient};
use crate::domains::tools::ToolError;

/// Parameters for the geocoding tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LocationToGeocodeParams {
    /// The location to convert to coordinates.
    #[schemars(description = "Location name to convert to latitude and longitude")]
    pub location: String,
}

/// Location geocoding tool implementation.
#[derive(Debug, Clone)]
pub struct LocationToGeocodeTool;

impl LocationToGeocodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "location_to_geocode_tool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Convert a location name provided as a string to latitude and longitude.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    ///
    /// An unknown location is a soft failure rendered into the sentence;
    /// an HTTP failure propagates out as a hard failure.
    pub async fn execute(
        params: &LocationToGeocodeParams,
        config: &Config,
    ) -> Result<String, ToolError> {
        info!("Geocoding location: {}", params.location);

        let client = GeocoderClient::new(&config.marine)
            .map_err(|e| ToolError::internal(e.to_string()))?;

        match client.geocode(&params.location).await {
            Ok(Some(coords)) => Ok(found_sentence(params.location.trim(), &coords)),
            Ok(None) => Ok(not_found_sentence(&params.location)),
            Err(e) => Err(ToolError::execution_failed(e.to_string())),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let location = arguments
            .get("location")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'location' parameter".to_string())?
            .to_string();

        let params = LocationToGeocodeParams { location };
        let sentence = Self::execute(&params, &config)
            .await
            .map_err(|e| e.to_string())?;
        let result = CallToolResult::success(vec![Content::text(sentence)]);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LocationToGeocodeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: LocationToGeocodeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let sentence = Self::execute(&params, &config)
                    .await
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(CallToolResult::success(vec![Content::text(sentence)]))
            }
            .boxed()
        })
    }
}

impl Default for LocationToGeocodeTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Sentence for a resolved location. Uses the trimmed name.
fn found_sentence(location: &str, coords: &Coordinates) -> String {
    format!(
        "Coordinates for '{}': Latitude {}, Longitude {}",
        location, coords.latitude, coords.longitude
    )
}

/// Sentence for an unresolvable location. Echoes the input untrimmed; the
/// phrasing is an external contract.
fn not_found_sentence(location: &str) -> String {
    format!("Error retrieving coordinates for '{location}': Location not found.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_deserialization() {
        let json = r#"{"location": "Boston, MA"}"#;
        let params: LocationToGeocodeParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.location, "Boston, MA");
    }

    #[test]
    fn test_found_sentence() {
        let coords = Coordinates {
            latitude: 42.3554334,
            longitude: -71.0605616,
        };
        assert_eq!(
            found_sentence("Boston, MA", &coords),
            "Coordinates for 'Boston, MA': Latitude 42.3554334, Longitude -71.0605616"
        );
    }

    #[test]
    fn test_not_found_sentence_echoes_input_untrimmed() {
        assert_eq!(
            not_found_sentence(" nowhere at all "),
            "Error retrieving coordinates for ' nowhere at all ': Location not found."
        );
    }
}
