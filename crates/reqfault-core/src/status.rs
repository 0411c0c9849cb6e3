use std::sync::OnceLock;

use http::StatusCode;
use indexmap::IndexMap;
use serde_json::Value;

use crate::RequestError;

/// A registered status symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    /// Symbolic name callers raise errors with (e.g. `notFound`)
    pub symbol: &'static str,
    /// HTTP status the symbol maps to
    pub status: StatusCode,
    /// Default human-readable message for the symbol
    pub message: &'static str,
}

/// Declares the registry table along with a constructor on [`RequestError`]
/// and a raising helper in [`raise`] for every symbol.
macro_rules! statuses {
    ($($fn_name:ident => $symbol:literal, $status:ident, $message:literal;)*) => {
        const ENTRIES: &[StatusEntry] = &[
            $(StatusEntry {
                symbol: $symbol,
                status: StatusCode::$status,
                message: $message,
            },)*
        ];

        impl RequestError {
            $(
                #[doc = concat!("`", $symbol, "` error with the default `{\"message\": \"", $message, "\"}` body")]
                #[must_use]
                pub fn $fn_name() -> Self {
                    Self::from_symbol($symbol, None)
                }
            )*
        }

        /// Helpers that construct a [`RequestError`] and return it as `Err`
        ///
        /// Meant for the tail of a handler (`return raise::not_found(None)`) or
        /// for `?`-less early exits. A `None` body falls back to the symbol's
        /// default message.
        pub mod raise {
            use serde_json::Value;

            use crate::RequestError;

            $(
                #[doc = concat!("Raise a `", $symbol, "` error")]
                ///
                /// # Errors
                ///
                /// Always returns `Err`
                pub fn $fn_name<T>(body: impl Into<Option<Value>>) -> Result<T, RequestError> {
                    Err(RequestError::from_symbol($symbol, body.into()))
                }
            )*
        }
    };
}

statuses! {
    bad_request => "badRequest", BAD_REQUEST, "Bad Request";
    unauthorized => "unauthorized", UNAUTHORIZED, "Unauthorized";
    payment_required => "paymentRequired", PAYMENT_REQUIRED, "Payment Required";
    forbidden => "forbidden", FORBIDDEN, "Forbidden";
    not_found => "notFound", NOT_FOUND, "Not Found";
    method_not_allowed => "methodNotAllowed", METHOD_NOT_ALLOWED, "Method Not Allowed";
    not_acceptable => "notAcceptable", NOT_ACCEPTABLE, "Not Acceptable";
    request_timeout => "requestTimeout", REQUEST_TIMEOUT, "Request Timeout";
    conflict => "conflict", CONFLICT, "Conflict";
    gone => "gone", GONE, "Gone";
    precondition_failed => "preconditionFailed", PRECONDITION_FAILED, "Precondition Failed";
    payload_too_large => "payloadTooLarge", PAYLOAD_TOO_LARGE, "Payload Too Large";
    unsupported_media_type => "unsupportedMediaType", UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type";
    unprocessable_entity => "unprocessableEntity", UNPROCESSABLE_ENTITY, "Unprocessable Entity";
    too_many_requests => "tooManyRequests", TOO_MANY_REQUESTS, "Too Many Requests";
    internal_server_error => "internalServerError", INTERNAL_SERVER_ERROR, "Internal Server Error";
    not_implemented => "notImplemented", NOT_IMPLEMENTED, "Not Implemented";
    bad_gateway => "badGateway", BAD_GATEWAY, "Bad Gateway";
    service_unavailable => "serviceUnavailable", SERVICE_UNAVAILABLE, "Service Unavailable";
    gateway_timeout => "gatewayTimeout", GATEWAY_TIMEOUT, "Gateway Timeout";
}

fn registry() -> &'static IndexMap<&'static str, StatusEntry> {
    static REGISTRY: OnceLock<IndexMap<&'static str, StatusEntry>> = OnceLock::new();
    REGISTRY.get_or_init(|| ENTRIES.iter().map(|entry| (entry.symbol, *entry)).collect())
}

/// Look up a registered symbol
pub fn lookup(symbol: &str) -> Option<&'static StatusEntry> {
    registry().get(symbol)
}

/// Registered symbols and their status codes, in registration order
pub fn status_codes() -> impl Iterator<Item = (&'static str, StatusCode)> {
    registry().values().map(|entry| (entry.symbol, entry.status))
}

/// Registered symbols and their default messages, in registration order
pub fn status_messages() -> impl Iterator<Item = (&'static str, &'static str)> {
    registry().values().map(|entry| (entry.symbol, entry.message))
}

/// Caller-supplied value identifying a target HTTP status
#[derive(Debug, Clone, PartialEq)]
pub enum StatusDescriptor {
    /// A numeric status (possibly fractional or out of range)
    Numeric(f64),
    /// A numeric string (`"404"`) or a registry symbol (`"notFound"`)
    Text(String),
}

impl StatusDescriptor {
    /// Resolve the descriptor to a status code
    ///
    /// Numbers and numeric strings resolve directly; the registry is only
    /// consulted for text that does not parse as a finite number. Numbers
    /// that are not integral HTTP statuses (100..=999), such as `42`,
    /// `404.5` or `1000`, do not resolve, so a [`RequestError`] built from
    /// them carries `500 Internal Server Error`.
    ///
    /// [`RequestError`]: crate::RequestError
    pub fn resolve(&self) -> Option<StatusCode> {
        match self {
            Self::Numeric(n) => status_from_number(*n),
            Self::Text(text) => match text.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => status_from_number(n),
                _ => lookup(text).map(|entry| entry.status),
            },
        }
    }
}

/// Resolve any descriptor-like value, see [`StatusDescriptor::resolve`]
pub fn resolve(descriptor: impl Into<StatusDescriptor>) -> Option<StatusCode> {
    descriptor.into().resolve()
}

fn status_from_number(n: f64) -> Option<StatusCode> {
    if !n.is_finite() || n.fract() != 0.0 || !(100.0..=999.0).contains(&n) {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let code = n as u16;

    StatusCode::from_u16(code).ok()
}

impl From<StatusCode> for StatusDescriptor {
    fn from(status: StatusCode) -> Self {
        Self::Numeric(f64::from(status.as_u16()))
    }
}

impl From<u16> for StatusDescriptor {
    fn from(code: u16) -> Self {
        Self::Numeric(f64::from(code))
    }
}

impl From<i32> for StatusDescriptor {
    fn from(code: i32) -> Self {
        Self::Numeric(f64::from(code))
    }
}

impl From<i64> for StatusDescriptor {
    #[allow(clippy::cast_precision_loss)]
    fn from(code: i64) -> Self {
        Self::Numeric(code as f64)
    }
}

impl From<f64> for StatusDescriptor {
    fn from(code: f64) -> Self {
        Self::Numeric(code)
    }
}

impl From<&str> for StatusDescriptor {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for StatusDescriptor {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for StatusDescriptor {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

/// Body used when a symbol is raised without one
pub(super) fn default_body(entry: &StatusEntry) -> Value {
    serde_json::json!({ "message": entry.message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_resolves_to_its_entry() {
        for (symbol, status) in status_codes() {
            assert_eq!(resolve(symbol), Some(status), "symbol {symbol}");
        }
    }

    #[test]
    fn registry_keeps_declaration_order() {
        let symbols: Vec<_> = status_codes().map(|(symbol, _)| symbol).take(5).collect();
        assert_eq!(
            symbols,
            ["badRequest", "unauthorized", "paymentRequired", "forbidden", "notFound"]
        );
    }

    #[test]
    fn messages_cover_every_symbol() {
        assert_eq!(status_messages().count(), status_codes().count());
        assert_eq!(lookup("notFound").map(|e| e.message), Some("Not Found"));
    }

    #[test]
    fn every_symbol_is_registered() {
        let expected = [
            ("badRequest", 400),
            ("unauthorized", 401),
            ("forbidden", 403),
            ("notFound", 404),
            ("methodNotAllowed", 405),
            ("preconditionFailed", 412),
            ("internalServerError", 500),
        ];

        for (symbol, code) in expected {
            assert_eq!(lookup(symbol).map(|e| e.status.as_u16()), Some(code));
        }
    }

    #[test]
    fn numeric_string_resolves_without_registry() {
        assert_eq!(resolve("404"), Some(StatusCode::NOT_FOUND));
        assert_eq!(resolve(" 418 "), Some(StatusCode::IM_A_TEAPOT));
        assert_eq!(resolve("299"), StatusCode::from_u16(299).ok());
    }

    #[test]
    fn numbers_resolve_directly() {
        assert_eq!(resolve(409_u16), Some(StatusCode::CONFLICT));
        assert_eq!(resolve(503_i32), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(resolve(StatusCode::GONE), Some(StatusCode::GONE));
        assert_eq!(resolve(400.0), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn unknown_symbol_does_not_resolve() {
        assert_eq!(resolve("bogusSymbol"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("NotFound"), None);
    }

    #[test]
    fn non_finite_or_unrepresentable_numbers_do_not_resolve() {
        assert_eq!(resolve(f64::NAN), None);
        assert_eq!(resolve(f64::INFINITY), None);
        assert_eq!(resolve(404.5), None);
        assert_eq!(resolve(42_i32), None);
        assert_eq!(resolve(-404_i64), None);
        assert_eq!(resolve("1000"), None);
    }

    #[test]
    fn numeric_text_follows_float_parsing() {
        assert_eq!(resolve("1e2"), Some(StatusCode::CONTINUE));
        assert_eq!(resolve("+404"), Some(StatusCode::NOT_FOUND));
        assert_eq!(resolve("404.0"), Some(StatusCode::NOT_FOUND));
        assert_eq!(resolve("404abc"), None);
        assert_eq!(resolve("42"), None);
        assert_eq!(resolve("404.5"), None);
    }

    #[test]
    fn non_finite_text_falls_through_to_registry() {
        assert_eq!(resolve("NaN"), None);
        assert_eq!(resolve("inf"), None);
    }
}
