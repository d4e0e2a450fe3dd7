//! Closure dataset loading.
//!
//! The closure table is a UTF-8 CSV file whose first row is a header. Each
//! data row holds the affected community, the beach name, and optionally the
//! closure reason. The table is re-read from disk on every call so that edits
//! to the file show up on the next tool invocation; there is no cache.

use std::path::Path;

use tracing::debug;

use super::error::ClosureError;

/// Reason used when a row has no third column.
pub const DEFAULT_REASON: &str = "No reason provided";

/// One row of the closure table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureRecord {
    /// Town or region the beach belongs to.
    pub area: String,

    /// Beach name as listed in the dataset.
    pub beach_name: String,

    /// Closure reason; [`DEFAULT_REASON`] when the column was absent. An
    /// empty column stays empty.
    pub reason: String,
}

/// The full set of closure records from one read of the dataset file.
#[derive(Debug, Clone, Default)]
pub struct ClosureTable {
    records: Vec<ClosureRecord>,
}

impl ClosureTable {
    /// Read the closure table from `path`.
    ///
    /// The header row is skipped. Rows with fewer than two fields cannot
    /// satisfy the record invariant (area and beach name always populated)
    /// and are skipped. A file that cannot be opened or decoded is a hard
    /// failure for the calling tool.
    pub fn load(path: &Path) -> Result<Self, ClosureError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if row.len() < 2 {
                continue;
            }
            records.push(ClosureRecord {
                area: row[0].to_string(),
                beach_name: row[1].to_string(),
                reason: row
                    .get(2)
                    .map(str::to_string)
                    .unwrap_or_else(|| DEFAULT_REASON.to_string()),
            });
        }

        debug!(
            "Loaded {} closure record(s) from {}",
            records.len(),
            path.display()
        );

        Ok(Self { records })
    }

    /// Build a table from records already in memory.
    pub fn from_records(records: Vec<ClosureRecord>) -> Self {
        Self { records }
    }

    /// All records in file order.
    pub fn records(&self) -> &[ClosureRecord] {
        &self.records
    }

    /// All beach names in file order, for fuzzy matching.
    pub fn beach_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.beach_name.as_str()).collect()
    }

    /// The first record whose beach name equals `beach_name` exactly.
    pub fn find(&self, beach_name: &str) -> Option<&ClosureRecord> {
        self.records.iter().find(|r| r.beach_name == beach_name)
    }
}
