//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use std::collections::HashMap;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::DatasetConfig;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Dataset configuration, for resources served from the closure file.
    dataset: DatasetConfig,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource entry
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// The closure dataset file, read fresh from the configured path on
    /// every request.
    DatasetFile,
}

impl ResourceService {
    /// Create a new ResourceService with the given dataset configuration.
    pub fn new(dataset: DatasetConfig) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.to_string(), entry))
            .collect();

        Self { dataset, resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::DatasetFile => {
                let text = std::fs::read_to_string(&self.dataset.path)?;
                ResourceContents::text(text, uri)
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn dataset_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_resource_service_lists_closure_data() {
        let service = ResourceService::new(DatasetConfig::default());
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.name, "Beach Closure Data");
    }

    #[tokio::test]
    async fn test_read_dataset_resource() {
        let file = dataset_file("Community,Beach Name,Reason\nBoston,Carson Beach,Bacteria\n");
        let service = ResourceService::new(DatasetConfig {
            path: file.path().to_path_buf(),
        });

        let result = service
            .read_resource("file://ClosureTable_data.csv")
            .await
            .unwrap();
        assert_eq!(result.contents.len(), 1);
        let rendered = serde_json::to_string(&result.contents[0]).unwrap();
        assert!(rendered.contains("Carson Beach"));
    }

    #[tokio::test]
    async fn test_read_missing_dataset_is_an_error() {
        let service = ResourceService::new(DatasetConfig {
            path: PathBuf::from("no-such-dataset.csv"),
        });
        let result = service.read_resource("file://ClosureTable_data.csv").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new(DatasetConfig::default());
        let result = service.read_resource("file://nonexistent.csv").await;
        assert!(result.is_err());
    }
}
