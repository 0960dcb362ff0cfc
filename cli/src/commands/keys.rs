//! `lab keys` — list and delete registered SSH keys.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::AccountStore;
use crate::application::services::config_service;
use crate::application::services::key_inventory::{DeleteOutcome, KeyInventory};
use crate::domain::KeyError;
use crate::output::TerminalReporter;

/// Keys subcommands.
#[derive(Subcommand)]
pub enum KeysCommand {
    /// List registered SSH keys
    List,
    /// Delete a registered SSH key (asks for confirmation)
    Delete {
        /// Name of the key
        name: String,
        /// Which key to delete when several share the name (1-based)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        nth: u64,
    },
}

/// Run the keys command.
///
/// # Errors
///
/// Returns an error if the account document cannot be loaded, the key does
/// not exist, or the deletion fails.
pub async fn run(app: &AppContext, cmd: KeysCommand) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let doc = app.account_store.load().await?;
    let inventory = KeyInventory::new(doc.ssh_keys);

    match cmd {
        KeysCommand::List => {
            app.output.header("SSH Keys");
            app.renderer().render_keys(&inventory.view(&config.ssh.guide_url))?;
            Ok(ExitCode::SUCCESS)
        }
        KeysCommand::Delete { name, nth } => {
            let position = usize::try_from(nth)?;
            let id = inventory
                .nth_named(&name, position - 1)
                .ok_or_else(|| KeyError::NotFound {
                    name: name.clone(),
                    nth: position,
                })?;

            let reporter = TerminalReporter::new(&app.output);
            let outcome = inventory
                .delete_with_confirmation(id, app, &app.account_store, &reporter)
                .await?;

            match outcome {
                DeleteOutcome::Deleted(key) => {
                    if app.is_json() {
                        println!(
                            "{:#}",
                            serde_json::json!({
                                "deleted": key,
                                "remaining": inventory.view(&config.ssh.guide_url),
                            })
                        );
                    } else {
                        app.renderer()
                            .render_keys(&inventory.view(&config.ssh.guide_url))?;
                    }
                }
                DeleteOutcome::Declined => {
                    if app.is_json() {
                        println!("{:#}", serde_json::json!({ "deleted": null, "declined": true }));
                    } else {
                        app.output.info("Cancelled.");
                    }
                }
                DeleteOutcome::Ignored => app.output.warn("A deletion for this key is already in progress."),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
