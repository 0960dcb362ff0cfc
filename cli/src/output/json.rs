//! JSON output helpers.
//!
//! Provides the `--json` renderer and the error-object formatter used when a
//! command fails in JSON mode.

use anyhow::{Context, Result};
use lab_common::{InstanceSnapshot, UserProfile};
use serde::Serialize;

use crate::domain::LabConfig;
use crate::domain::eligibility::{Action, ActionDecision};
use crate::domain::keys::KeyListView;

/// Renders domain types as pretty-printed JSON on stdout.
pub struct JsonRenderer;

#[derive(Serialize)]
struct ActionRow<'a> {
    action: Action,
    label: &'static str,
    enabled: bool,
    reason: &'a str,
}

impl JsonRenderer {
    /// Render action decisions as `{instance, actions: [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_actions(
        &self,
        snapshot: &InstanceSnapshot,
        decisions: &[(Action, ActionDecision)],
    ) -> Result<()> {
        let actions: Vec<ActionRow<'_>> = decisions
            .iter()
            .map(|(action, decision)| ActionRow {
                action: *action,
                label: action.label(),
                enabled: decision.enabled,
                reason: &decision.reason,
            })
            .collect();
        print(&serde_json::json!({
            "instance": snapshot,
            "actions": actions,
        }))
    }

    /// Render the key list view.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_keys(&self, view: &KeyListView) -> Result<()> {
        print(view)
    }

    /// Render the profile together with the key list view.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_profile(&self, profile: &UserProfile, keys: &KeyListView) -> Result<()> {
        print(&serde_json::json!({
            "profile": profile,
            "full_name": profile.full_name(),
            "ssh_keys": keys,
        }))
    }

    /// Render the configuration and its location.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &LabConfig, path: &std::path::Path) -> Result<()> {
        print(&serde_json::json!({
            "path": path,
            "config": config,
        }))
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print(&serde_json::json!({ "version": version }))
    }
}

fn print(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{text}");
    Ok(())
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
