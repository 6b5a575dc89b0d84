//! Console configuration: backend location and idle-logout window.
//!
//! The host binary reads the keys from the process environment and hands the
//! result to server rendering as a Leptos context. The rendered shell embeds
//! the same keys as `<meta>` tags so the hydrated bundle runs with the host's
//! values; build-time values are the fallback when no tags are present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://api.theclipstream.com/api";
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 5 * 60;

pub const API_BASE_URL_VAR: &str = "ADMIN_API_BASE_URL";
pub const IDLE_TIMEOUT_VAR: &str = "ADMIN_IDLE_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Backend API root, without a trailing slash.
    pub api_base_url: String,
    /// Inactivity window after which a protected view forces logout.
    pub idle_timeout: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }
}

impl ConsoleConfig {
    /// Build config from a key lookup (process env, build env, test map).
    ///
    /// Optional:
    /// - `ADMIN_API_BASE_URL`: default `https://api.theclipstream.com/api`
    /// - `ADMIN_IDLE_TIMEOUT_SECS`: default 300
    ///
    /// # Errors
    ///
    /// Returns an error when a present value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match non_blank(lookup(API_BASE_URL_VAR)) {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let idle_timeout = match non_blank(lookup(IDLE_TIMEOUT_VAR)) {
            Some(raw) => parse_idle_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        };
        Ok(Self { api_base_url, idle_timeout })
    }

    /// Key/value pairs the shell embeds as `<meta name=.. content=..>` tags.
    ///
    /// Feeding these back through [`ConsoleConfig::from_lookup`] yields `self`.
    pub fn meta_entries(&self) -> [(&'static str, String); 2] {
        [
            (API_BASE_URL_VAR, self.api_base_url.clone()),
            (IDLE_TIMEOUT_VAR, self.idle_timeout.as_secs().to_string()),
        ]
    }

    /// Config the host embedded in the current document, if any.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let lookup = |key: &str| {
            document
                .query_selector(&format!(r#"meta[name="{key}"]"#))
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        };
        if lookup(API_BASE_URL_VAR).is_none() && lookup(IDLE_TIMEOUT_VAR).is_none() {
            return None;
        }
        Self::from_lookup(lookup)
            .map_err(|e| log::warn!("invalid console config in page, using build-time values: {e}"))
            .ok()
    }

    /// Config baked into the browser bundle at compile time.
    ///
    /// Malformed values fall back to defaults with a logged warning; the
    /// bundle has no way to refuse to start.
    pub fn from_build_env() -> Self {
        let lookup = |key: &str| match key {
            API_BASE_URL_VAR => option_env!("ADMIN_API_BASE_URL").map(str::to_owned),
            IDLE_TIMEOUT_VAR => option_env!("ADMIN_IDLE_TIMEOUT_SECS").map(str::to_owned),
            _ => None,
        };
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            log::warn!("invalid build-time console config, using defaults: {e}");
            Self::default()
        })
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { var: API_BASE_URL_VAR, value: raw.to_owned() });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_idle_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { var: IDLE_TIMEOUT_VAR, value: raw.to_owned() }),
    }
}
