//! Domain types and validators for CLI configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "platform.host",
    "platform.api_url",
    "defaults.remote",
    "defaults.stack",
    "defaults.timeout",
];

pub const DEFAULT_HOST: &str = "heroku.com";
pub const DEFAULT_API_URL: &str = "https://api.heroku.com";
pub const DEFAULT_REMOTE: &str = "heroku";
pub const DEFAULT_STACK: &str = "aspen-mri-1.8.6";
pub const DEFAULT_CREATE_TIMEOUT_SECS: u64 = 30;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.heroku/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Where the platform lives.
    pub platform: PlatformConfig,
    /// Defaults for `heroku create`.
    pub defaults: CreateDefaults,
}

/// Platform endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlatformConfig {
    /// Hosting domain, used for derived web and git URLs.
    pub host: String,
    /// Base URL of the management API.
    pub api_url: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CreateDefaults {
    /// Git remote created for new apps.
    pub remote: String,
    /// Stack requested for new apps.
    pub stack: String,
    /// Seconds to wait for provisioning.
    pub timeout: u64,
}

impl Default for CreateDefaults {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            stack: DEFAULT_STACK.to_string(),
            timeout: DEFAULT_CREATE_TIMEOUT_SECS,
        }
    }
}

impl CliConfig {
    /// Current value of a whitelisted key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not in the allowed list.
    pub fn get(&self, key: &str) -> Result<String> {
        validate_config_key(key)?;
        Ok(match key {
            "platform.host" => self.platform.host.clone(),
            "platform.api_url" => self.platform.api_url.clone(),
            "defaults.remote" => self.defaults.remote.clone(),
            "defaults.stack" => self.defaults.stack.clone(),
            _ => self.defaults.timeout.to_string(),
        })
    }

    /// Validate and assign a whitelisted key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "platform.host" => self.platform.host = value.to_string(),
            "platform.api_url" => self.platform.api_url = value.trim_end_matches('/').to_string(),
            "defaults.remote" => self.defaults.remote = value.to_string(),
            "defaults.stack" => self.defaults.stack = value.to_string(),
            _ => self.defaults.timeout = value.parse()?,
        }
        Ok(())
    }

    /// All settings as `(key, value)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        VALID_CONFIG_KEYS
            .iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let expected = match key {
        "platform.host" if !is_hostname(value) => "Expected a host name such as heroku.com",
        "platform.api_url" if !(value.starts_with("https://") || value.starts_with("http://")) => {
            "Expected an http:// or https:// URL"
        }
        "defaults.remote" if !is_remote_name(value) => {
            "Expected a git remote name (letters, digits, '-', '_', '.')"
        }
        "defaults.stack" if value.trim().is_empty() || value.contains(char::is_whitespace) => {
            "Expected a stack name without spaces"
        }
        "defaults.timeout" if value.parse::<u64>().is_err() => {
            "Expected a whole number of seconds"
        }
        _ => return Ok(()),
    };
    Err(ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
    .into())
}

fn is_hostname(value: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*(:\d+)?$")
        .is_ok_and(|re| re.is_match(value))
}

fn is_remote_name(value: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").is_ok_and(|re| re.is_match(value))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
