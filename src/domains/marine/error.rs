//! Marine-domain error types.

use thiserror::Error;

/// Errors raised by the geocoder and tide clients.
///
/// These are hard failures (non-success HTTP status, timeout, malformed
/// payload). "No result found" is not an error in this domain; the clients
/// report it as an absent value instead.
#[derive(Debug, Error)]
pub enum MarineError {
    /// The HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A coordinate field in the geocoding response was not a number.
    #[error("Invalid coordinate in geocoding response: {0}")]
    InvalidCoordinate(#[from] std::num::ParseFloatError),
}
