//! Application service — per-instance action controls.
//!
//! Bridges eligibility decisions to the effects an action triggers. All
//! effects go through injected ports; nothing here runs in the background.

use lab_common::InstanceSnapshot;

use crate::application::ports::{InstanceInfo, InstanceSurface, UrlOpener};
use crate::domain::LabConfig;
use crate::domain::eligibility::{self, Action, ActionDecision};

/// Result of invoking an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeOutcome {
    InfoShown,
    ConnectionInstructionsShown,
    FileManagerOpened { url: String },
    Ignored(IgnoreReason),
}

/// Why an invocation had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The action is disabled for the current snapshot.
    Disabled,
    /// The action is enabled but the snapshot lacks the data it needs.
    MissingData,
}

/// Action controls for one instance snapshot.
pub struct ActionPanel<'a> {
    snapshot: &'a InstanceSnapshot,
    file_manager_path: &'a str,
}

impl<'a> ActionPanel<'a> {
    #[must_use]
    pub fn new(snapshot: &'a InstanceSnapshot, config: &'a LabConfig) -> Self {
        Self {
            snapshot,
            file_manager_path: &config.file_manager.path,
        }
    }

    /// Current decision for `action`. Cheap and side-effect free.
    #[must_use]
    pub fn describe(&self, action: Action) -> ActionDecision {
        eligibility::resolve(self.snapshot, action)
    }

    /// Decisions for every action, in display order.
    #[must_use]
    pub fn describe_all(&self) -> Vec<(Action, ActionDecision)> {
        eligibility::resolve_all(self.snapshot)
    }

    /// File browser endpoint, if the instance exposes a base URL.
    #[must_use]
    pub fn file_manager_url(&self) -> Option<String> {
        self.snapshot
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| join_endpoint(url, self.file_manager_path))
    }

    /// Perform the effect of `action`.
    ///
    /// The decision is re-checked here even if the caller already disabled
    /// the control; disabled actions are ignored.
    pub fn invoke(
        &self,
        action: Action,
        surface: &impl InstanceSurface,
        opener: &impl UrlOpener,
    ) -> InvokeOutcome {
        let decision = self.describe(action);
        if !decision.enabled {
            tracing::debug!(%action, reason = %decision.reason, "ignoring disabled action");
            return InvokeOutcome::Ignored(IgnoreReason::Disabled);
        }

        match action {
            Action::Info => {
                surface.show_info(&InstanceInfo::from_snapshot(self.snapshot));
                InvokeOutcome::InfoShown
            }
            Action::Ssh => {
                surface.show_connection_instructions(self.snapshot);
                InvokeOutcome::ConnectionInstructionsShown
            }
            Action::FileManager => {
                let Some(url) = self.file_manager_url() else {
                    tracing::warn!(
                        instance = self.snapshot.name.as_deref().unwrap_or("-"),
                        "file manager enabled but instance has no url"
                    );
                    return InvokeOutcome::Ignored(IgnoreReason::MissingData);
                };
                if let Err(e) = opener.open_url(&url) {
                    tracing::warn!(%url, error = %e, "could not open file manager");
                }
                InvokeOutcome::FileManagerOpened { url }
            }
        }
    }
}

/// Join a base URL and a relative path with exactly one `/`.
#[must_use]
pub fn join_endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
