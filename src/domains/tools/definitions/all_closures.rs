//! All-beaches closure report tool.

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
use crate::domains::closures::{ClosureTable, all_closures_sentence};
use crate::domains::tools::ToolError;

/// Parameters for the all-beaches report. The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AllBeachClosureParams {}

/// All-beaches closure report tool implementation.
#[derive(Debug, Clone)]
pub struct AllBeachClosureTool;

impl AllBeachClosureTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "all_beach_closure_tool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Report the status of all beaches in Massachusetts. Returns a sentence \
         listing every closed beach and the community it belongs to.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    ///
    /// Every row of the table is reported as closed; the dataset carries
    /// only closed beaches, so no filtering happens here.
    pub fn execute(config: &Config) -> Result<String, ToolError> {
        info!("Reporting all beach closures");

        let table = ClosureTable::load(&config.dataset.path)
            .map_err(|e| ToolError::execution_failed(e.to_string()))?;

        Ok(all_closures_sentence(&table))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let sentence = Self::execute(&config).map_err(|e| e.to_string())?;
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
            input_schema: cached_schema_for_type::<AllBeachClosureParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            async move {
                // File I/O off the async executor.
                let sentence = tokio::task::spawn_blocking(move || Self::execute(&config))
                    .await
                    .map_err(|_| McpError::internal_error("Task panicked".to_string(), None))?
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(CallToolResult::success(vec![Content::text(sentence)]))
            }
            .boxed()
        })
    }
}

impl Default for AllBeachClosureTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dataset_config(contents: &str) -> (Config, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();

        let mut config = Config::default();
        config.dataset.path = file.path().to_path_buf();
        (config, file)
    }

    #[test]
    fn test_execute_lists_every_row() {
        let (config, _file) = dataset_config(
            "Community,Beach Name,Reason\n\
             Boston,Carson Beach,Bacteria\n\
             Lynn,Kings Beach,Bacteria\n",
        );
        let sentence = AllBeachClosureTool::execute(&config).unwrap();
        assert_eq!(
            sentence,
            "The following beaches are currently closed: \
             Carson Beach in Boston, Kings Beach in Lynn."
        );
    }

    #[test]
    fn test_execute_empty_dataset() {
        let (config, _file) = dataset_config("Community,Beach Name,Reason\n");
        let sentence = AllBeachClosureTool::execute(&config).unwrap();
        assert_eq!(sentence, "The following beaches are currently closed: .");
    }

    #[test]
    fn test_execute_missing_dataset_is_hard_failure() {
        let mut config = Config::default();
        config.dataset.path = "no-such-dataset.csv".into();
        assert!(AllBeachClosureTool::execute(&config).is_err());
    }
}
