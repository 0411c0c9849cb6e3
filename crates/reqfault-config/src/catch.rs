use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;

/// A configuration value that may have the wrong type
///
/// Wrong-typed values are kept as [`Setting::Invalid`] instead of failing the
/// whole load; normalization replaces them with the default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Setting<T> {
    /// Value of the expected type
    Valid(T),
    /// Anything else
    Invalid(IgnoredAny),
}

impl<T> From<T> for Setting<T> {
    fn from(value: T) -> Self {
        Self::Valid(value)
    }
}

/// Built-in error logging hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggerSetting {
    /// Log every caught error through `tracing`
    #[default]
    Tracing,
    /// No logging hook
    Off,
}

/// Catch layer options as written in the config file
///
/// Every field is optional and independently defaulted, see
/// [`CatchConfig::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatchConfig {
    /// Serialize bodies as JSON instead of plain text
    #[serde(default)]
    pub json: Option<Setting<bool>>,
    /// Respond 500 to unrecognized errors instead of delegating them
    #[serde(default, alias = "catchAll")]
    pub catch_all: Option<Setting<bool>>,
    /// Terminate the response once status and body are written
    #[serde(default, alias = "endRequest")]
    pub end_request: Option<Setting<bool>>,
    /// Body written when the error carries none
    #[serde(default, alias = "defaultFail", alias = "defaultBody")]
    pub default_fail: Option<Value>,
    /// Logging hook invoked with every caught error
    #[serde(default)]
    pub logger: Option<Setting<LoggerSetting>>,
}

/// Fully populated catch layer options
#[derive(Debug, Clone, PartialEq)]
pub struct CatchSettings {
    /// Serialize bodies as JSON rather than plain text
    pub json: bool,
    /// Answer opaque errors with a 500 instead of forwarding them
    pub catch_all: bool,
    /// End the response once the body is written
    pub end_request: bool,
    /// Body written when the error carries none
    pub default_fail: Value,
    /// `None` when logging is off or the configured logger was not recognized
    pub logger: Option<LoggerSetting>,
}

impl Default for CatchSettings {
    fn default() -> Self {
        CatchConfig::default().normalize()
    }
}

impl CatchConfig {
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = Some(json.into());
        self
    }

    #[must_use]
    pub fn with_catch_all(mut self, catch_all: bool) -> Self {
        self.catch_all = Some(catch_all.into());
        self
    }

    #[must_use]
    pub fn with_end_request(mut self, end_request: bool) -> Self {
        self.end_request = Some(end_request.into());
        self
    }

    #[must_use]
    pub fn with_default_fail(mut self, default_fail: impl Into<Value>) -> Self {
        self.default_fail = Some(default_fail.into());
        self
    }

    #[must_use]
    pub fn with_logger(mut self, logger: LoggerSetting) -> Self {
        self.logger = Some(logger.into());
        self
    }

    /// Fill in defaults for absent or wrong-typed options
    ///
    /// Never fails: bad values are reported with a warning and replaced.
    pub fn normalize(&self) -> CatchSettings {
        let json = pick("json", self.json.as_ref(), true);
        let catch_all = pick("catch_all", self.catch_all.as_ref(), false);
        let end_request = pick("end_request", self.end_request.as_ref(), true);

        let default_fail = self.default_fail.clone().unwrap_or_else(|| {
            if json {
                Value::Object(serde_json::Map::new())
            } else {
                Value::String(String::new())
            }
        });

        let logger = match &self.logger {
            None => Some(LoggerSetting::Tracing),
            Some(Setting::Valid(LoggerSetting::Off)) => None,
            Some(Setting::Valid(logger)) => Some(*logger),
            Some(Setting::Invalid(_)) => {
                tracing::warn!("catch.logger is not a known logger, ignoring it");
                None
            }
        };

        CatchSettings {
            json,
            catch_all,
            end_request,
            default_fail,
            logger,
        }
    }
}

fn pick<T: Copy>(name: &str, setting: Option<&Setting<T>>, default: T) -> T {
    match setting {
        Some(Setting::Valid(value)) => *value,
        Some(Setting::Invalid(_)) => {
            tracing::warn!(option = name, "catch option has the wrong type, using the default");
            default
        }
        None => default,
    }
}
