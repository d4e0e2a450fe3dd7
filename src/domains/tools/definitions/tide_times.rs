//! Tide time acquisition tool.

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
use crate::domains::marine::{TideClient, TideData};
use crate::domains::tools::ToolError;

/// Parameters for the tide time acquisition tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TideTimeAcquisitionParams {
    /// Latitude of the location.
    #[schemars(description = "Latitude of the location, as a float")]
    pub lat: f64,

    /// Longitude of the location.
    #[schemars(description = "Longitude of the location, as a float")]
    pub lon: f64,
}

/// Tide time acquisition tool implementation.
#[derive(Debug, Clone)]
pub struct TideTimeAcquisitionTool;

impl TideTimeAcquisitionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tide_time_acquisition_tool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Acquire tide times for a given latitude and longitude. Send the latitude \
         and longitude as floats to the Marea API.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    ///
    /// A response without tide data is a soft failure rendered into the
    /// sentence; an HTTP failure propagates out as a hard failure.
    pub async fn execute(
        params: &TideTimeAcquisitionParams,
        config: &Config,
    ) -> Result<String, ToolError> {
        info!("Acquiring tide times for ({}, {})", params.lat, params.lon);

        let client = TideClient::new(&config.marine, &config.credentials)
            .map_err(|e| ToolError::internal(e.to_string()))?;

        match client.fetch_tides(params.lat, params.lon).await {
            Ok(Some(data)) => Ok(tides_sentence(params.lat, params.lon, &data)),
            Ok(None) => Ok(no_data_sentence(params.lat, params.lon)),
            Err(e) => Err(ToolError::execution_failed(e.to_string())),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let lat = arguments
            .get("lat")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| "Missing or invalid 'lat' parameter".to_string())?;

        let lon = arguments
            .get("lon")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| "Missing or invalid 'lon' parameter".to_string())?;

        let params = TideTimeAcquisitionParams { lat, lon };
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
            input_schema: cached_schema_for_type::<TideTimeAcquisitionParams>(),
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
                let params: TideTimeAcquisitionParams =
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

impl Default for TideTimeAcquisitionTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Sentence carrying the tide extremes and heights verbatim.
fn tides_sentence(lat: f64, lon: f64, data: &TideData) -> String {
    format!(
        "Tide times for location ({}, {}): {}, Heights: {}",
        lat, lon, data.extremes, data.heights
    )
}

/// Sentence for a response with no usable tide data; the phrasing is an
/// external contract.
fn no_data_sentence(lat: f64, lon: f64) -> String {
    format!("Error retrieving tide data for location ({lat}, {lon}): No data found.")
}
