//! Error normalization for axum handlers
//!
//! Raise [`RequestError`]s with a status descriptor (`404`, `"404"` or
//! `"notFound"`), return them from handlers as [`HandlerError`], and wrap the
//! router with a [`Catcher`] built from configuration.
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! use reqfault::config::Config;
//! use reqfault::Catcher;
//!
//! let config = Config::load(std::path::Path::new("reqfault.toml"))?;
//! reqfault::init_telemetry(config.telemetry.as_ref())?;
//! let catcher = Catcher::new(&config.catch);
//! # let _ = catcher;
//! # Ok(())
//! # }
//! ```

pub use reqfault_config as config;
pub use reqfault_core::{
    HttpError, RequestError, StatusDescriptor, StatusEntry, lookup, raise, resolve, status_codes, status_messages,
};
pub use reqfault_server::{AxumSink, CaughtError, Catcher, ErrorHook, HandlerError, Outcome, ResponseSink, catch_middleware};
pub use reqfault_telemetry::init as init_telemetry;
