//! Logging setup for reqfault hosts
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer, compact or JSON depending on configuration.

use reqfault_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging from configuration
///
/// An invalid filter falls back to `info`. Calling this more than once is
/// harmless: later calls leave the first subscriber in place and return
/// `Ok(false)`.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for exporters that can
/// fail to start
pub fn init(config: Option<&TelemetryConfig>) -> anyhow::Result<bool> {
    let default_config = TelemetryConfig::default();
    let config = config.unwrap_or(&default_config);

    let filter = build_filter(&config.log_filter);

    let installed = match config.format {
        LogFormat::Compact => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry().with(filter).with(fmt_layer).try_init().is_ok()
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(false);

            tracing_subscriber::registry().with(filter).with(fmt_layer).try_init().is_ok()
        }
    };

    if installed {
        tracing::debug!(filter = %config.log_filter, format = ?config.format, "logging initialized");
    }

    Ok(installed)
}

fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("invalid log filter `{directives}` ({e}), falling back to `info`");
        EnvFilter::new("info")
    })
}
