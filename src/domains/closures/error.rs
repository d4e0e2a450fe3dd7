//! Closure-domain error types.

use thiserror::Error;

/// Errors raised while loading the closure dataset.
///
/// These are hard failures: the calling tool does not catch them, so they
/// surface to the transport layer as execution faults.
#[derive(Debug, Error)]
pub enum ClosureError {
    /// The dataset file could not be opened, decoded, or parsed.
    #[error("Failed to read closure dataset: {0}")]
    Dataset(#[from] csv::Error),
}
