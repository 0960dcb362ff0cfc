//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Key errors ────────────────────────────────────────────────────────────────

/// Errors related to SSH key inventory changes.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The deletion collaborator rejected the request. The key list is unchanged.
    #[error("Could not delete SSH key '{name}'. Run the command again to retry.")]
    DeleteFailed {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("No SSH key named '{name}' at position {nth}.")]
    NotFound { name: String, nth: usize },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{hint}")]
    InvalidValue {
        key: String,
        value: String,
        hint: String,
    },
}
