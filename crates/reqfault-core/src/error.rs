use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::status::{self, StatusDescriptor};

/// An application-raised request error
///
/// Carries the HTTP status to respond with and an optional body. The status
/// is resolved once at construction: descriptors that do not resolve to a
/// valid status become `500 Internal Server Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request error: {code}")]
pub struct RequestError {
    code: StatusCode,
    body: Option<Value>,
}

impl RequestError {
    /// Create an error without a body
    pub fn new(descriptor: impl Into<StatusDescriptor>) -> Self {
        Self::build(&descriptor.into(), None)
    }

    /// Create an error carrying a response body
    pub fn with_body(descriptor: impl Into<StatusDescriptor>, body: impl Into<Value>) -> Self {
        Self::build(&descriptor.into(), Some(body.into()))
    }

    fn build(descriptor: &StatusDescriptor, body: Option<Value>) -> Self {
        let code = descriptor.resolve().unwrap_or_else(|| {
            tracing::debug!(?descriptor, "unresolvable status descriptor, using 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        Self { code, body }
    }

    /// Build from a registry symbol, defaulting the body to its message
    pub(super) fn from_symbol(symbol: &'static str, body: Option<Value>) -> Self {
        let Some(entry) = status::lookup(symbol) else {
            return Self::build(&StatusDescriptor::from(symbol), body);
        };

        Self {
            code: entry.status,
            body: Some(body.unwrap_or_else(|| status::default_body(entry))),
        }
    }

    /// Resolved HTTP status
    pub const fn code(&self) -> StatusCode {
        self.code
    }

    /// Response body, if one was given
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consume the error and take the body
    pub fn into_body(self) -> Option<Value> {
        self.body
    }
}
