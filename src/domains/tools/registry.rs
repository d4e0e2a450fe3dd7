//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when the http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;
#[cfg(feature = "http")]
use tracing::warn;

use crate::core::config::Config;

#[cfg(feature = "http")]
use super::error::ToolError;

use super::definitions::{
    AllBeachClosureTool, LocationToGeocodeTool, SpecificBeachClosureTool, TideTimeAcquisitionTool,
};

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when the http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AllBeachClosureTool::NAME,
            LocationToGeocodeTool::NAME,
            SpecificBeachClosureTool::NAME,
            TideTimeAcquisitionTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools. Both
    /// HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AllBeachClosureTool::to_tool(),
            LocationToGeocodeTool::to_tool(),
            SpecificBeachClosureTool::to_tool(),
            TideTimeAcquisitionTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools. Hard failures come
    /// back as `Err` and become JSON-RPC errors; soft failures are already
    /// sentences inside the returned content.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            AllBeachClosureTool::NAME => {
                AllBeachClosureTool::http_handler(arguments, self.config.clone())
            }
            LocationToGeocodeTool::NAME => {
                LocationToGeocodeTool::http_handler(arguments, self.config.clone()).await
            }
            SpecificBeachClosureTool::NAME => {
                SpecificBeachClosureTool::http_handler(arguments, self.config.clone())
            }
            TideTimeAcquisitionTool::NAME => {
                TideTimeAcquisitionTool::http_handler(arguments, self.config.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"specific_beach_closure_tool"));
        assert!(names.contains(&"all_beach_closure_tool"));
        assert!(names.contains(&"location_to_geocode_tool"));
        assert!(names.contains(&"tide_time_acquisition_tool"));
    }

    #[test]
    fn test_get_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some());
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
