//! `lab account` — profile panel.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::AccountStore;
use crate::application::services::config_service;
use crate::application::services::key_inventory::KeyInventory;

/// Account subcommands.
#[derive(Subcommand)]
pub enum AccountCommand {
    /// Show profile and registered SSH keys
    Show,
}

/// Run the account command.
///
/// # Errors
///
/// Returns an error if the account document or configuration cannot be loaded.
pub async fn run(app: &AppContext, cmd: AccountCommand) -> Result<ExitCode> {
    match cmd {
        AccountCommand::Show => {
            let config = config_service::load_config(&app.config_store)?;
            let doc = app.account_store.load().await?;
            let inventory = KeyInventory::new(doc.ssh_keys);
            app.renderer()
                .render_profile(&doc.profile, &inventory.view(&config.ssh.guide_url))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
