//! Closures domain module.
//!
//! Everything that answers "is this beach closed?" lives here: the dataset
//! reader, the approximate name matcher, and the sentence rendering used by
//! the closure tools.
//!
//! ## Architecture
//!
//! - `dataset.rs` - CSV closure table loading (fresh read per call)
//! - `matching.rs` - similarity ratio and close-match selection
//! - `lookup.rs` - sentence rendering for single-beach and full reports
//! - `error.rs` - closure-specific error types

pub mod dataset;
mod error;
pub mod lookup;
pub mod matching;

pub use dataset::{ClosureRecord, ClosureTable, DEFAULT_REASON};
pub use error::ClosureError;
pub use lookup::{all_closures_sentence, closure_sentence};
pub use matching::{DEFAULT_CUTOFF, DEFAULT_MAX_RESULTS, get_close_matches, similarity_ratio};
