//! Programmatic configuration builder for integration tests

use reqfault::config::{CatchConfig, Config, LoggerSetting, TelemetryConfig};
use serde_json::Value;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Defaults plus debug logging so failures are easy to trace
    pub fn new() -> Self {
        Self {
            config: Config {
                catch: CatchConfig::default(),
                telemetry: Some(TelemetryConfig {
                    log_filter: "debug".to_owned(),
                    ..TelemetryConfig::default()
                }),
            },
        }
    }

    /// Start from TOML text instead of defaults
    pub fn from_toml(raw: &str) -> Self {
        Self {
            config: Config::from_toml(raw).expect("valid test config"),
        }
    }

    /// Answer unrecognized errors with a 500
    pub fn with_catch_all(mut self) -> Self {
        self.config.catch = self.config.catch.with_catch_all(true);
        self
    }

    /// Send bodies as plain text
    pub fn with_plain_text(mut self) -> Self {
        self.config.catch = self.config.catch.with_json(false);
        self
    }

    pub fn with_default_fail(mut self, body: impl Into<Value>) -> Self {
        self.config.catch = self.config.catch.with_default_fail(body);
        self
    }

    pub fn without_logger(mut self) -> Self {
        self.config.catch = self.config.catch.with_logger(LoggerSetting::Off);
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
