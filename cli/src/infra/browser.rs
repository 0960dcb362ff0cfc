//! Infrastructure implementation of the `UrlOpener` port.

use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::UrlOpener;

/// Opens URLs with the platform's default handler.
///
/// `$BROWSER`, when set, takes precedence over the platform default. The
/// child process is detached: output is discarded and never awaited.
#[derive(Debug, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    fn command(url: &str) -> Command {
        if let Ok(browser) = std::env::var("BROWSER")
            && !browser.trim().is_empty()
        {
            let mut cmd = Command::new(browser.trim());
            cmd.arg(url);
            return cmd;
        }
        platform_command(url)
    }
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

impl UrlOpener for SystemUrlOpener {
    fn open_url(&self, url: &str) -> Result<()> {
        let mut cmd = Self::command(url);
        let program = cmd.get_program().to_string_lossy().into_owned();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("{program} is not installed or not in PATH"))?;
        tracing::debug!(%url, %program, "url handed to browser");
        Ok(())
    }
}
