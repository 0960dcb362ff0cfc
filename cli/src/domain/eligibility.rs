//! Action eligibility rules for the per-instance action controls.
//!
//! Pure functions only: a snapshot goes in, a decision comes out. Nothing
//! here fails; missing or unrecognised data always resolves to a disabled
//! action with an explanation.

use std::fmt;

use lab_common::{EnvironmentKind, InstanceSnapshot};
use serde::Serialize;

// ── Reasons ───────────────────────────────────────────────────────────────────

pub const INFO_NOT_READY: &str = "Instance is not ready yet";
pub const INFO_AVAILABLE: &str = "Show instance details";

pub const SSH_UNSUPPORTED: &str = "Containers do not support SSH connection (yet!)";
pub const SSH_NOT_READY: &str = "Instance must be ready in order to connect through SSH";
pub const SSH_AVAILABLE: &str = "Show SSH connection instructions";

pub const FILES_UNSUPPORTED: &str = "Virtual machines do not support file management (yet!)";
pub const FILES_NOT_READY: &str =
    "Instance must be ready in order to manage this container's files";
pub const FILES_NO_ENDPOINT: &str = "Instance does not expose a file browser endpoint";
pub const FILES_AVAILABLE: &str = "Open file manager";

// ── Types ─────────────────────────────────────────────────────────────────────

/// User-facing actions offered on every instance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Info,
    Ssh,
    FileManager,
}

impl Action {
    /// All actions, in display order.
    pub const ALL: [Action; 3] = [Action::Info, Action::Ssh, Action::FileManager];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Ssh => "SSH",
            Self::FileManager => "File manager",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether an action may be invoked, and the text explaining why.
///
/// `reason` is always populated. An enabled decision guarantees the data the
/// action needs is present on the snapshot it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDecision {
    pub enabled: bool,
    pub reason: String,
}

impl ActionDecision {
    fn enabled(reason: &str) -> Self {
        Self {
            enabled: true,
            reason: reason.to_string(),
        }
    }

    fn disabled(reason: &str) -> Self {
        Self {
            enabled: false,
            reason: reason.to_string(),
        }
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Resolve the decision for one action.
///
/// Environment-kind incompatibility is checked before readiness, so a
/// starting container already explains that SSH will never be available.
#[must_use]
pub fn resolve(snapshot: &InstanceSnapshot, action: Action) -> ActionDecision {
    let ready = snapshot.is_ready();
    let kind = snapshot.environment_kind;
    match action {
        Action::Info if ready => ActionDecision::enabled(INFO_AVAILABLE),
        Action::Info => ActionDecision::disabled(INFO_NOT_READY),

        Action::Ssh if kind == Some(EnvironmentKind::Container) => {
            ActionDecision::disabled(SSH_UNSUPPORTED)
        }
        Action::Ssh if !ready => ActionDecision::disabled(SSH_NOT_READY),
        Action::Ssh => ActionDecision::enabled(SSH_AVAILABLE),

        Action::FileManager if kind == Some(EnvironmentKind::VirtualMachine) => {
            ActionDecision::disabled(FILES_UNSUPPORTED)
        }
        Action::FileManager if !ready => ActionDecision::disabled(FILES_NOT_READY),
        Action::FileManager if !has_endpoint(snapshot) => {
            ActionDecision::disabled(FILES_NO_ENDPOINT)
        }
        Action::FileManager => ActionDecision::enabled(FILES_AVAILABLE),
    }
}

/// Resolve every action, in display order.
#[must_use]
pub fn resolve_all(snapshot: &InstanceSnapshot) -> Vec<(Action, ActionDecision)> {
    Action::ALL
        .iter()
        .map(|&action| (action, resolve(snapshot, action)))
        .collect()
}

fn has_endpoint(snapshot: &InstanceSnapshot) -> bool {
    snapshot
        .url
        .as_deref()
        .is_some_and(|url| !url.trim().is_empty())
}
