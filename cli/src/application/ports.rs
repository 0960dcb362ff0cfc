//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `lab_common` — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use lab_common::{AccountDocument, InstanceSnapshot, SshKey};

use crate::domain::LabConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Details shown by the instance info popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceInfo<'a> {
    pub ip: Option<&'a str>,
    pub created_at: Option<DateTime<Utc>>,
    pub template_name: &'a str,
}

impl<'a> InstanceInfo<'a> {
    #[must_use]
    pub fn from_snapshot(snapshot: &'a InstanceSnapshot) -> Self {
        Self {
            ip: snapshot.ip.as_deref(),
            created_at: snapshot.created_at,
            template_name: &snapshot.template_name,
        }
    }
}

// ── Action Effect Ports ───────────────────────────────────────────────────────

/// Opens a URL in a new browsing context.
///
/// Fire-and-forget: implementations must not wait for the browser.
pub trait UrlOpener {
    /// Request that `url` be opened.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be dispatched.
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Surfaces owned by the presentation layer that an action can bring up.
pub trait InstanceSurface {
    /// Show the info popover for an instance.
    fn show_info(&self, info: &InstanceInfo<'_>);
    /// Show connection instructions for an instance. Content is up to the surface.
    fn show_connection_instructions(&self, snapshot: &InstanceSnapshot);
}

// ── Key Inventory Ports ───────────────────────────────────────────────────────

/// Persistent removal of a registered SSH key.
#[allow(async_fn_in_trait)]
pub trait KeyDeleter {
    /// Remove `key` from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the key could not be removed. The caller keeps
    /// its in-memory list unchanged in that case.
    async fn delete_key(&self, key: &SshKey) -> Result<()>;
}

/// Asks the user a yes/no question.
pub trait Confirmer {
    /// Returns `true` only on explicit affirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be shown (e.g. no TTY).
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Storage Ports ─────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored configuration cannot be read or parsed.
    fn load(&self) -> Result<LabConfig>;
    /// Persist configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    fn save(&self, config: &LabConfig) -> Result<()>;
    /// Location of the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

/// Source of the already-resolved account document.
#[allow(async_fn_in_trait)]
pub trait AccountStore {
    /// Load the account profile and registered keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing or malformed.
    async fn load(&self) -> Result<AccountDocument>;
}
