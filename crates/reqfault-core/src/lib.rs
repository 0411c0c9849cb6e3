//! Status registry and typed request errors
//!
//! Handlers raise a [`RequestError`] with a status descriptor: a number, a
//! numeric string, or a registered symbol such as `"notFound"`. Descriptors
//! that cannot be resolved fall back to `500 Internal Server Error`.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_error;
mod status;

pub use error::RequestError;
pub use http_error::HttpError;
pub use status::{StatusDescriptor, StatusEntry, lookup, raise, resolve, status_codes, status_messages};
