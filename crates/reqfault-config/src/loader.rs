use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents fail to
    /// expand or parse
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// `{{ env.VAR }}` placeholders are expanded before parsing. Options
    /// inside `[catch]` with the wrong type do not fail the parse; they are
    /// defaulted when the catch layer normalizes them.
    ///
    /// # Errors
    ///
    /// Returns an error if variable expansion or TOML parsing fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        tracing::debug!(
            has_telemetry = config.telemetry.is_some(),
            "configuration parsed"
        );

        Ok(config)
    }
}
