use std::sync::Arc;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use reqfault_core::RequestError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HandlerError>;

/// Error returned by request handlers
///
/// The catch layer classifies errors by variant: a [`RequestError`] is
/// structured and always answered with its own status, anything else is
/// opaque and handled according to `catch_all`.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Application-raised error with an explicit status
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Any other failure in the request path
    #[error(transparent)]
    Opaque(#[from] anyhow::Error),
}

impl HandlerError {
    /// Wrap an arbitrary error as opaque
    pub fn opaque(error: impl Into<anyhow::Error>) -> Self {
        Self::Opaque(error.into())
    }

    /// The structured error, if this is one
    pub const fn as_request(&self) -> Option<&RequestError> {
        match self {
            Self::Request(err) => Some(err),
            Self::Opaque(_) => None,
        }
    }

    /// Response sent when no catch layer handles the error
    fn fallback_response(&self) -> Response {
        match self {
            Self::Request(err) => {
                let body = err.body().cloned().unwrap_or_else(|| serde_json::json!({}));
                (err.code(), Json(body)).into_response()
            }
            Self::Opaque(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        }
    }
}

/// Error attached to a response for catch layers further out
///
/// Present on every response produced from a [`HandlerError`] until a catch
/// layer responds to it and ends the request.
#[derive(Debug, Clone)]
pub struct CaughtError(Arc<HandlerError>);

impl CaughtError {
    /// The error the response was produced from
    pub fn error(&self) -> &HandlerError {
        &self.0
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let mut response = self.fallback_response();
        response.extensions_mut().insert(CaughtError(Arc::new(self)));
        response
    }
}

