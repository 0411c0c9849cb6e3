use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use http::StatusCode;
use reqfault_config::{CatchConfig, CatchSettings, LoggerSetting};
use serde_json::Value;

use crate::fault::HandlerError;
use crate::sink::ResponseSink;

/// Hook invoked with every error before the catch layer acts on it
pub type ErrorHook = Arc<dyn Fn(&HandlerError) + Send + Sync>;

/// What the catch layer did with an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Status and body were written to the sink
    Responded,
    /// The error was forwarded to the next handler; nothing was written
    Delegated,
}

/// Turns handler errors into responses
///
/// Built once from configuration; cloning is cheap and every clone shares the
/// same normalized settings.
#[derive(Clone)]
pub struct Catcher {
    settings: Arc<CatchSettings>,
    hook: Option<ErrorHook>,
}

impl std::fmt::Debug for Catcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catcher")
            .field("settings", &self.settings)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl Default for Catcher {
    fn default() -> Self {
        Self::from_settings(CatchSettings::default())
    }
}

impl Catcher {
    /// Normalize `config` and build a catcher from it
    pub fn new(config: &CatchConfig) -> Self {
        Self::from_settings(config.normalize())
    }

    /// Build a catcher from already normalized settings
    pub fn from_settings(settings: CatchSettings) -> Self {
        let hook: Option<ErrorHook> = match settings.logger {
            Some(LoggerSetting::Tracing) => Some(Arc::new(log_with_tracing)),
            Some(LoggerSetting::Off) | None => None,
        };

        Self {
            settings: Arc::new(settings),
            hook,
        }
    }

    /// Replace the logging hook
    #[must_use]
    pub fn with_hook(mut self, hook: impl Fn(&HandlerError) + Send + Sync + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Remove the logging hook
    #[must_use]
    pub fn without_hook(mut self) -> Self {
        self.hook = None;
        self
    }

    /// Normalized settings this catcher resolves with
    pub fn settings(&self) -> &CatchSettings {
        &self.settings
    }

    /// Resolve `error` into a response on `sink`, or hand it to `next`
    ///
    /// Structured errors are always answered with their own status. Opaque
    /// errors get a 500 when `catch_all` is set; otherwise `next` is called
    /// and the sink is left untouched.
    pub fn handle<S>(&self, error: &HandlerError, sink: &mut S, next: impl FnOnce(&HandlerError)) -> Outcome
    where
        S: ResponseSink + ?Sized,
    {
        self.observe(error);

        let body = match error {
            HandlerError::Request(err) => {
                sink.set_status(err.code());
                err.body().unwrap_or(&self.settings.default_fail)
            }
            HandlerError::Opaque(_) if self.settings.catch_all => {
                sink.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                &self.settings.default_fail
            }
            HandlerError::Opaque(_) => {
                next(error);
                return Outcome::Delegated;
            }
        };

        if self.settings.json {
            sink.send_json(body);
        } else {
            match body {
                Value::String(text) => sink.send_text(text),
                other => sink.send_text(&other.to_string()),
            }
        }

        if self.settings.end_request {
            sink.end_stream();
        }

        Outcome::Responded
    }

    /// Run the logging hook; a panicking hook must not abort resolution
    fn observe(&self, error: &HandlerError) {
        let Some(hook) = &self.hook else {
            return;
        };

        if catch_unwind(AssertUnwindSafe(|| hook(error))).is_err() {
            tracing::warn!("error logging hook panicked, continuing");
        }
    }
}

fn log_with_tracing(error: &HandlerError) {
    match error {
        HandlerError::Request(err) if err.code().is_server_error() => {
            tracing::error!(status = %err.code(), body = ?err.body(), "request failed");
        }
        HandlerError::Request(err) => {
            tracing::warn!(status = %err.code(), body = ?err.body(), "request rejected");
        }
        HandlerError::Opaque(err) => {
            let chain = format!("{err:#}");
            tracing::error!(error = %chain, "unhandled error in request");
        }
    }
}
