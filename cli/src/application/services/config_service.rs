//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::LabConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the store cannot load the configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<LabConfig> {
    store.load()
}

/// Validate and persist a single setting, returning the updated config.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<LabConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
