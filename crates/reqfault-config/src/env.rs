use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Failure while substituting `{{ env.VAR }}` placeholders
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// Variable is unset and the placeholder has no default
    #[error("environment variable not found: `{0}`")]
    MissingVar(String),

    /// Placeholder names something other than `env.<VAR>`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// A `| default("...")` suffix supplies the value for unset variables.
/// Comment lines are left untouched so commented-out settings never require
/// their variables.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(input.len());

    for line in input.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            output.push_str(&substitute(line)?);
        }
    }

    Ok(output)
}

fn substitute(line: &str) -> Result<Cow<'_, str>, ExpandError> {
    let re = placeholder();
    if !re.is_match(line) {
        return Ok(Cow::Borrowed(line));
    }

    let mut result = String::with_capacity(line.len());
    let mut last_end = 0;

    for caps in re.captures_iter(line) {
        let whole = caps.get(0).expect("group 0 always matches");
        result.push_str(&line[last_end..whole.start()]);
        result.push_str(&lookup(&caps)?);
        last_end = whole.end();
    }

    result.push_str(&line[last_end..]);
    Ok(Cow::Owned(result))
}

fn lookup(caps: &Captures<'_>) -> Result<String, ExpandError> {
    let key = &caps[1];
    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_owned()));
    };

    match std::env::var(var_name) {
        Ok(value) => Ok(value),
        Err(_) => caps
            .get(2)
            .map(|default| default.as_str().to_owned())
            .ok_or_else(|| ExpandError::MissingVar(var_name.to_owned())),
    }
}
