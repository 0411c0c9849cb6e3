#![allow(clippy::must_use_candidate)]

pub mod catch;
mod env;
mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use catch::*;
pub use env::ExpandError;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level reqfault configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Catch layer options
    #[serde(default)]
    pub catch: CatchConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
