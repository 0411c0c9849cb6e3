use http::StatusCode;

use crate::RequestError;

/// Trait for domain errors that map onto HTTP responses
///
/// Implemented by error enums that already know their status. The provided
/// [`HttpError::to_request_error`] lets handlers hand them to the catch layer
/// as a regular [`RequestError`].
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Convert into a [`RequestError`] with a `{"message": ...}` body
    fn to_request_error(&self) -> RequestError {
        RequestError::with_body(self.status_code(), serde_json::json!({ "message": self.client_message() }))
    }
}
