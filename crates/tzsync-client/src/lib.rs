//! HTTP client for the TimeZoneDB API.
//!
//! Two read-only operations are consumed: `list-time-zone` (every known
//! zone) and `get-time-zone` (the current offset/DST interval for one
//! zone). Both share an envelope that reports upstream failures — rate
//! limits, bad keys — inside an otherwise successful HTTP response, so
//! the envelope is checked before any payload is decoded.

pub mod api;
pub mod error;
pub mod pacing;

#[cfg(test)]
mod pacing_tests;

pub use api::TimeZoneDbClient;
pub use error::{ClientError, ClientResult};
pub use pacing::RequestPacer;
