//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;
use crate::domain::KeyError;

/// Account, SSH key and instance actions for the cloud lab
#[derive(Parser)]
#[command(
    name = "lab",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Account document (profile and SSH keys)
    #[arg(long, global = true, env = "LAB_ACCOUNT", value_name = "FILE")]
    pub account: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show or invoke instance actions
    #[command(subcommand)]
    Instance(commands::instance::InstanceCommand),

    /// Manage SSH keys
    #[command(subcommand)]
    Keys(commands::keys::KeysCommand),

    /// Show account profile
    #[command(subcommand)]
    Account(commands::account::AccountCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// In JSON mode a failing command prints an error object on stdout and
    /// returns a failure exit code instead of an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails in human mode.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            account,
            command,
        } = self;
        let flags = AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes },
            account,
        };
        let app = AppContext::new(&flags)?;

        let result = match command {
            Command::Instance(cmd) => commands::instance::run(&app, cmd),
            Command::Keys(cmd) => commands::keys::run(&app, cmd).await,
            Command::Account(cmd) => commands::account::run(&app, cmd).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        };

        match result {
            Err(e) if app.is_json() => {
                println!(
                    "{}",
                    crate::output::json::format_error(&format!("{e:#}"), error_code(&e))?
                );
                Ok(ExitCode::FAILURE)
            }
            other => other,
        }
    }
}

fn error_code(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<KeyError>() {
        Some(KeyError::DeleteFailed { .. }) => "delete_failed",
        Some(KeyError::NotFound { .. }) => "key_not_found",
        None => "error",
    }
}
