//! Marine domain module.
//!
//! Thin clients for the two third-party services the tide tools depend on:
//! Nominatim geocoding and Marea tide predictions. Both are stateless,
//! single-shot HTTP calls with bounded timeouts; "nothing found" is an
//! absent value, everything else that goes wrong is a [`MarineError`].

mod error;
pub mod geocoder;
pub mod tides;

pub use error::MarineError;
pub use geocoder::{Coordinates, GeocoderClient};
pub use tides::{TideClient, TideData};
