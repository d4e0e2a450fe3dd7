//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod all_closures;
pub mod geocode;
pub mod specific_closure;
pub mod tide_times;

pub use all_closures::{AllBeachClosureParams, AllBeachClosureTool};
pub use geocode::{LocationToGeocodeParams, LocationToGeocodeTool};
pub use specific_closure::{SpecificBeachClosureParams, SpecificBeachClosureTool};
pub use tide_times::{TideTimeAcquisitionParams, TideTimeAcquisitionTool};
