//! Domain types and validators for lab CLI configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["file_manager.path", "ssh.guide_url"];

/// Path segment appended to an instance URL to reach its file browser.
/// Must match what the serving backend routes.
pub const DEFAULT_FILE_MANAGER_PATH: &str = "mydrive/files";

pub const DEFAULT_SSH_GUIDE_URL: &str = "https://crownlabs.polito.it/resources/crownlabs_ssh/";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.lab/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LabConfig {
    pub file_manager: FileManagerConfig,
    pub ssh: SshConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileManagerConfig {
    #[serde(default = "default_file_manager_path")]
    pub path: String,
}

impl Default for FileManagerConfig {
    fn default() -> Self {
        Self {
            path: default_file_manager_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SshConfig {
    /// Documentation shown when the user has no key registered.
    #[serde(default = "default_ssh_guide_url")]
    pub guide_url: String,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            guide_url: default_ssh_guide_url(),
        }
    }
}

fn default_file_manager_path() -> String {
    DEFAULT_FILE_MANAGER_PATH.to_string()
}

fn default_ssh_guide_url() -> String {
    DEFAULT_SSH_GUIDE_URL.to_string()
}

impl LabConfig {
    /// Validate and apply a single `key = value` setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "file_manager.path" => self.file_manager.path = value.trim_matches('/').to_string(),
            "ssh.guide_url" => self.ssh.guide_url = value.to_string(),
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
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
    let hint = match key {
        "file_manager.path" if !is_valid_path_segment(value) => {
            "Expected a relative URL path such as 'mydrive/files'."
        }
        "ssh.guide_url" if !is_http_url(value) => "Expected an http:// or https:// URL.",
        _ => return Ok(()),
    };
    Err(ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        hint: hint.to_string(),
    }
    .into())
}

fn is_valid_path_segment(value: &str) -> bool {
    let trimmed = value.trim_matches('/');
    !trimmed.is_empty()
        && trimmed
            .split('/')
            .all(|part| !part.is_empty() && part != "." && part != "..")
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.~/".contains(c))
}

fn is_http_url(value: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
        && !value.chars().any(char::is_whitespace)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
