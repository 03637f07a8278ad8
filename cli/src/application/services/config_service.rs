//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::CliConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the stored file exists but cannot be read or parsed.
pub fn load_config(store: &impl ConfigStore) -> Result<CliConfig> {
    store.load()
}

/// Validate `value` for `key`, apply it and persist the result.
///
/// Nothing is written when validation fails.
///
/// # Errors
///
/// Returns `ConfigError` for an unknown key or invalid value, or an I/O
/// error if saving fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<CliConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    tracing::debug!(key, value, "setting saved");
    Ok(config)
}
