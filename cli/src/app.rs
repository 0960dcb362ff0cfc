//! Application context — unified state passed to every command handler.
//!
//! `AppContext` bundles the output context, output mode, stores and
//! interaction flags so command signatures stay stable when a new
//! cross-cutting concern is added.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::Confirmer;
use crate::infra::account::FileAccountStore;
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Answer yes to confirmation prompts (also set by `LAB_YES`).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
    /// Explicit account document path (`--account` / `LAB_ACCOUNT`).
    pub account: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context. Quiet in JSON mode so only JSON reaches stdout.
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration store.
    pub config_store: YamlConfigStore,
    /// Account document store; also the key deletion backend.
    pub account_store: FileAccountStore,
    /// When `true`, never prompt.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `LAB_YES`
    /// environment variables are present.
    pub non_interactive: bool,
    /// Answer given to prompts in non-interactive mode.
    pub assume_yes: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if no account path was given and the home directory
    /// cannot be determined.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let assume_yes = flags.behaviour.yes || std::env::var("LAB_YES").is_ok();
        let non_interactive = assume_yes || std::env::var("CI").is_ok();

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Ok(Self {
            output: OutputContext::new(
                flags.output.no_color,
                flags.output.quiet || flags.output.json,
            ),
            mode,
            config_store: YamlConfigStore::default(),
            account_store: FileAccountStore::resolve(flags.account.clone())?,
            non_interactive,
            assume_yes,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true`, returns `default` immediately
    /// without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}

impl Confirmer for AppContext {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.non_interactive {
            return Ok(self.assume_yes);
        }
        AppContext::confirm(self, prompt, false)
    }
}
