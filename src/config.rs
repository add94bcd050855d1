use anyhow::{anyhow, bail, Context, Result};
use std::time::Duration;

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8080";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub(crate) const API_URL_VAR: &str = "SPENDVIEW_API_URL";
pub(crate) const TIMEOUT_VAR: &str = "SPENDVIEW_TIMEOUT_SECS";

const API_URL_FLAG: &str = "--api-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Base URL of the expenditure API, without a trailing slash.
    pub(crate) api_url: String,
    pub(crate) timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub(crate) fn load(args: &[String]) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Defaults, then environment, then command-line flags.
    pub(crate) fn resolve(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = env(API_URL_VAR) {
            config.api_url = url;
        }
        if let Some(raw) = env(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {TIMEOUT_VAR}: {raw:?}"))?;
            if secs == 0 {
                bail!("{TIMEOUT_VAR} must be at least 1 second");
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(url) = flag_value(args, API_URL_FLAG)? {
            config.api_url = url.to_string();
        }

        config.api_url = config.api_url.trim().trim_end_matches('/').to_string();
        if config.api_url.is_empty() {
            bail!("API URL must not be empty");
        }
        Ok(config)
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| anyhow!("Missing value for {flag}")),
    }
}

/// Drop global options (and their values) so only the program name,
/// command, and command arguments remain.
pub(crate) fn strip_global_flags(args: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == API_URL_FLAG {
            iter.next();
            continue;
        }
        out.push(arg.clone());
    }
    out
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
