//! Specific beach closure lookup tool.
//!
//! Answers whether one named beach is closed, tolerating misspellings via
//! the closures domain's fuzzy matcher.

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
use crate::domains::closures::{ClosureTable, closure_sentence};
use crate::domains::tools::ToolError;

/// Parameters for the specific beach closure lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SpecificBeachClosureParams {
    /// The beach name to check.
    #[schemars(description = "Name of the Massachusetts beach to check; misspellings are tolerated")]
    pub beach_name: String,
}

/// Specific beach closure tool implementation.
#[derive(Debug, Clone)]
pub struct SpecificBeachClosureTool;

impl SpecificBeachClosureTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "specific_beach_closure_tool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Check if a specific beach in Massachusetts is closed, with fuzzy matching \
         on the beach name. Returns a sentence naming the matched closures and \
         their reasons, or stating that the beach appears to be open.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    ///
    /// The closure table is re-read from disk on every call. A dataset read
    /// failure is a hard failure; every other outcome is a sentence.
    pub fn execute(
        params: &SpecificBeachClosureParams,
        config: &Config,
    ) -> Result<String, ToolError> {
        info!("Closure lookup for beach: {}", params.beach_name);

        let table = ClosureTable::load(&config.dataset.path)
            .map_err(|e| ToolError::execution_failed(e.to_string()))?;

        Ok(closure_sentence(&table, &params.beach_name))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let beach_name = arguments
            .get("beach_name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'beach_name' parameter".to_string())?
            .to_string();

        let params = SpecificBeachClosureParams { beach_name };
        let sentence = Self::execute(&params, &config).map_err(|e| e.to_string())?;
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
            input_schema: cached_schema_for_type::<SpecificBeachClosureParams>(),
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
                let params: SpecificBeachClosureParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // File I/O off the async executor.
                let sentence =
                    tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                        .await
                        .map_err(|_| {
                            McpError::internal_error("Task panicked".to_string(), None)
                        })?
                        .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(CallToolResult::success(vec![Content::text(sentence)]))
            }
            .boxed()
        })
    }
}

impl Default for SpecificBeachClosureTool {
    fn default() -> Self {
        Self::new()
    }
}
