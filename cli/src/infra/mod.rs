//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: filesystem access for the
//! account and configuration documents, snapshot parsing, and browser
//! launching.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod account;
pub mod browser;
pub mod config;
pub mod snapshot;

use std::path::PathBuf;

use anyhow::Result;

/// `~/.lab`, the default home for configuration and account documents.
fn lab_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.join(".lab"))
}
