//! `lab instance` — action controls for one instance snapshot.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use crate::app::AppContext;
use crate::application::services::action_panel::{ActionPanel, IgnoreReason, InvokeOutcome};
use crate::application::services::config_service;
use crate::domain::eligibility::{self, Action};
use crate::infra::browser::SystemUrlOpener;
use crate::infra::snapshot::load_snapshot;
use crate::output::{JsonSurface, TerminalSurface};

/// Instance subcommands.
#[derive(Subcommand)]
pub enum InstanceCommand {
    /// Show which actions are available and why
    Actions {
        /// Snapshot document (YAML or JSON), or `-` for stdin
        snapshot: PathBuf,
    },
    /// Invoke an action
    Open {
        /// Action to invoke
        #[arg(value_enum)]
        action: ActionArg,
        /// Snapshot document (YAML or JSON), or `-` for stdin
        snapshot: PathBuf,
    },
}

/// Action names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    Info,
    Ssh,
    Files,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Info => Action::Info,
            ActionArg::Ssh => Action::Ssh,
            ActionArg::Files => Action::FileManager,
        }
    }
}

/// Run the instance command.
///
/// Invoking a disabled action is not an error: the reason is shown and the
/// command succeeds without any effect.
///
/// # Errors
///
/// Returns an error if the snapshot or configuration cannot be loaded.
pub fn run(app: &AppContext, cmd: InstanceCommand) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    match cmd {
        InstanceCommand::Actions { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            let panel = ActionPanel::new(&snapshot, &config);
            app.renderer().render_actions(&snapshot, &panel.describe_all())?;
        }
        InstanceCommand::Open { action, snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            let panel = ActionPanel::new(&snapshot, &config);
            let action = Action::from(action);
            let outcome = if app.is_json() {
                panel.invoke(action, &JsonSurface::new(&config.ssh.guide_url), &SystemUrlOpener)
            } else {
                let surface = TerminalSurface::new(&app.output, &config.ssh.guide_url);
                panel.invoke(action, &surface, &SystemUrlOpener)
            };
            report_outcome(app, &panel, action, &outcome);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn report_outcome(app: &AppContext, panel: &ActionPanel<'_>, action: Action, outcome: &InvokeOutcome) {
    let ignored = match outcome {
        InvokeOutcome::Ignored(IgnoreReason::Disabled) => Some(panel.describe(action).reason),
        InvokeOutcome::Ignored(IgnoreReason::MissingData) => {
            Some(eligibility::FILES_NO_ENDPOINT.to_string())
        }
        _ => None,
    };

    if app.is_json() {
        match (outcome, ignored) {
            (_, Some(reason)) => println!(
                "{:#}",
                serde_json::json!({ "action": action, "outcome": "ignored", "reason": reason })
            ),
            (InvokeOutcome::FileManagerOpened { url }, None) => println!(
                "{:#}",
                serde_json::json!({ "action": action, "outcome": "opened", "url": url })
            ),
            _ => {}
        }
        return;
    }

    match (outcome, ignored) {
        (_, Some(reason)) => app.output.warn(&format!("{} unavailable: {reason}", action.label())),
        (InvokeOutcome::FileManagerOpened { url }, None) => {
            app.output.success(&format!("Opened file manager: {url}"));
        }
        _ => {}
    }
}
