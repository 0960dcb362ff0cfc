//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod keys;

pub use config::{LabConfig, validate_config_key, validate_config_value};
pub use eligibility::{Action, ActionDecision, resolve, resolve_all};
pub use error::{ConfigError, KeyError};
pub use keys::{KeyEntry, KeyId, KeyListView};
