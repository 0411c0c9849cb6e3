//! Catch layer for axum handlers
//!
//! Handlers return [`HandlerError`]. A [`Catcher`], built once from
//! [`reqfault_config::CatchConfig`], turns those errors into responses:
//! structured [`reqfault_core::RequestError`]s get their own status and body,
//! opaque errors are answered with a 500 or forwarded, depending on
//! `catch_all`.
//!
//! ```no_run
//! use axum::{Router, routing::get};
//! use reqfault_config::CatchConfig;
//! use reqfault_core::RequestError;
//! use reqfault_server::{Catcher, HandlerError};
//!
//! async fn show() -> Result<String, HandlerError> {
//!     Err(RequestError::new("notFound").into())
//! }
//!
//! let catcher = Catcher::new(&CatchConfig::default().with_catch_all(true));
//! let app: Router = catcher.apply(Router::new().route("/items/{id}", get(show)));
//! ```

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod catcher;
mod fault;
mod middleware;
mod sink;

pub use catcher::{Catcher, ErrorHook, Outcome};
pub use fault::{CaughtError, HandlerError, Result};
pub use middleware::catch_middleware;
pub use sink::{AxumSink, ResponseSink};
