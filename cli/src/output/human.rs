//! Human-readable terminal renderer.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use lab_common::{InstanceSnapshot, UserProfile};
use owo_colors::OwoColorize as _;

use crate::application::ports::InstanceInfo;
use crate::domain::LabConfig;
use crate::domain::eligibility::{Action, ActionDecision};
use crate::domain::keys::{EMPTY_KEYS_HINT, EMPTY_KEYS_MESSAGE, KeyListView, ellipsize};
use crate::output::OutputContext;

/// Widest key material shown in the table before it is cut.
const KEY_COLUMN_WIDTH: usize = 48;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        if !self.ctx.quiet {
            println!("lab {version}");
        }
    }

    /// Render the three action controls of an instance with their tooltips.
    pub fn render_actions(&self, snapshot: &InstanceSnapshot, decisions: &[(Action, ActionDecision)]) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header(&instance_title(snapshot));
        self.ctx.kv(
            "Status:     ",
            snapshot.status.map_or("unknown", |s| s.as_str()),
        );
        self.ctx.kv(
            "Environment:",
            &snapshot
                .environment_kind
                .map_or_else(|| "unspecified".to_string(), |k| k.to_string()),
        );
        println!();
        for (action, decision) in decisions {
            let label = format!("{:<13}", action.label());
            if decision.enabled {
                println!(
                    "  {} {}{}",
                    "✓".style(self.ctx.styles.success),
                    label.style(self.ctx.styles.bold),
                    decision.reason
                );
            } else {
                println!(
                    "  {} {}{}",
                    "✗".style(self.ctx.styles.dim),
                    label.style(self.ctx.styles.dim),
                    decision.reason.style(self.ctx.styles.dim)
                );
            }
        }
        println!();
    }

    /// Render the key table, or guidance when there is nothing to list.
    pub fn render_keys(&self, view: &KeyListView) {
        if self.ctx.quiet {
            return;
        }
        match view {
            KeyListView::Empty { guide_url } => {
                self.ctx.info(EMPTY_KEYS_MESSAGE);
                self.ctx.info(EMPTY_KEYS_HINT);
                println!("      {}", guide_url.style(self.ctx.styles.link));
            }
            KeyListView::Rows { .. } => {
                for line in key_table_lines(view) {
                    println!("  {line}");
                }
                if view.shows_delete_control() {
                    println!();
                    println!(
                        "  {}",
                        "Delete a key: lab keys delete <name> [--nth N]".style(self.ctx.styles.dim)
                    );
                }
            }
        }
    }

    /// Render the profile panel followed by the SSH key table.
    pub fn render_profile(&self, profile: &UserProfile, keys: &KeyListView) {
        if self.ctx.quiet {
            return;
        }
        println!();
        let avatar = profile.avatar.as_deref().unwrap_or("👤");
        println!(
            "  {avatar}  {}  {}",
            profile.full_name().style(self.ctx.styles.bold),
            profile.student_id.style(self.ctx.styles.dim)
        );
        println!();
        self.ctx.header("Personal");
        self.ctx.kv("First name:", &profile.first_name);
        self.ctx.kv("Last name: ", &profile.last_name);
        println!();
        self.ctx.header("Login");
        self.ctx.kv("Username:  ", &profile.username);
        println!();
        self.ctx.header("University");
        self.ctx.kv("Email:     ", &profile.email);
        println!();
        self.ctx.header("SSH Keys");
        self.render_keys(keys);
        println!();
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &LabConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<20} {}", "file_manager.path:", config.file_manager.path);
        println!("  {:<20} {}", "ssh.guide_url:", config.ssh.guide_url);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["LAB_CONFIG", "LAB_ACCOUNT", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Render the info popover of an instance.
    pub fn render_info(&self, info: &InstanceInfo<'_>) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.kv("IP:      ", info.ip.unwrap_or("not assigned"));
        if let Some(created) = info.created_at {
            self.ctx
                .kv("Created: ", &format!("{} ago", format_age(created, Utc::now())));
        }
        self.ctx.kv("Template:", info.template_name);
        println!();
    }

    /// Render SSH connection instructions for an instance.
    pub fn render_connection_instructions(&self, snapshot: &InstanceSnapshot, guide_url: &str) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header("SSH connection");
        println!();
        match snapshot.ip.as_deref() {
            Some(ip) => {
                println!("  Connect with:");
                println!("      ssh <username>@{ip}");
            }
            None => self.ctx.warn("The instance has no IP address assigned yet."),
        }
        println!();
        println!("  Your public key must be registered first (lab keys list).");
        println!("  Guide: {}", guide_url.style(self.ctx.styles.link));
        println!();
    }
}

/// Header line for an instance: name and template when known.
#[must_use]
pub fn instance_title(snapshot: &InstanceSnapshot) -> String {
    match (snapshot.name.as_deref(), snapshot.template_name.as_str()) {
        (Some(name), "") => name.to_string(),
        (Some(name), template) => format!("{name} ({template})"),
        (None, "") => "Instance".to_string(),
        (None, template) => template.to_string(),
    }
}

/// Plain-text table rows for a key list: header first, then one row per key.
///
/// When names repeat, a `#` column shows each row's position among the keys
/// sharing its name, which is what `lab keys delete <name> --nth N` selects.
#[must_use]
pub fn key_table_lines(view: &KeyListView) -> Vec<String> {
    let rows = view.rows();
    if rows.is_empty() {
        return Vec::new();
    }
    let name_width = rows
        .iter()
        .map(|e| e.key.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let positions: Vec<usize> = rows
        .iter()
        .map(|e| {
            let n = seen.entry(e.key.name.as_str()).or_insert(0);
            *n += 1;
            *n
        })
        .collect();
    let max_position = positions.iter().copied().max().unwrap_or(1);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    if max_position > 1 {
        let pos_width = max_position.to_string().len();
        lines.push(format!("{:<name_width$}  {:>pos_width$}  Key", "Name", "#"));
        for (entry, position) in rows.iter().zip(positions) {
            lines.push(format!(
                "{:<name_width$}  {position:>pos_width$}  {}",
                entry.key.name,
                ellipsize(&entry.key.key, KEY_COLUMN_WIDTH)
            ));
        }
    } else {
        lines.push(format!("{:<name_width$}  Key", "Name"));
        for entry in rows {
            lines.push(format!(
                "{:<name_width$}  {}",
                entry.key.name,
                ellipsize(&entry.key.key, KEY_COLUMN_WIDTH)
            ));
        }
    }
    lines
}

/// Coarse age of a timestamp: `"3d 4h"`, `"2h 5m"`, or `"7m"`.
#[must_use]
pub fn format_age(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = u64::try_from((now - since).num_seconds()).unwrap_or(0);
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
