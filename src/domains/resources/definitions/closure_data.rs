//! Beach closure data resource definition.

use super::{ResourceContent, ResourceDefinition};

/// The closure dataset, exposed as a readable CSV resource.
pub struct ClosureDataResource;

impl ResourceDefinition for ClosureDataResource {
    const URI: &'static str = "file://ClosureTable_data.csv";
    const NAME: &'static str = "Beach Closure Data";
    const DESCRIPTION: &'static str =
        "CSV file containing the closure status of beaches in Massachusetts.";
    const MIME_TYPE: &'static str = "text/csv";

    fn content() -> ResourceContent {
        // Served from the configured dataset path, read fresh per request.
        ResourceContent::DatasetFile
    }
}
