//! Infrastructure implementation of the `AccountStore` and `KeyDeleter` ports.
//!
//! `FileAccountStore` reads the account document from YAML and persists key
//! deletions with an atomic write (temp file + rename). Blocking file I/O
//! runs under `tokio::task::spawn_blocking`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lab_common::{AccountDocument, SshKey};

use crate::application::ports::{AccountStore, KeyDeleter};

/// Account document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    /// Use `explicit` if given (from `--account` / `LAB_ACCOUNT`), else
    /// `~/.lab/account.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is given and the home directory cannot be
    /// determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Ok(Self::with_path(path)),
            None => Ok(Self::with_path(super::lab_dir()?.join("account.yaml"))),
        }
    }

    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_sync(&self) -> Result<AccountDocument> {
        anyhow::ensure!(
            self.path.exists(),
            "no account document at {}. Pass --account <file> or set LAB_ACCOUNT.",
            self.path.display()
        );
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading account document {}", self.path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing account document {}", self.path.display()))
    }

    fn save_sync(&self, doc: &AccountDocument) -> Result<()> {
        let content = serde_yaml::to_string(doc).context("serializing account document")?;

        let temp_path = self.path.with_extension("yaml.tmp");
        std::fs::write(&temp_path, &content)
            .with_context(|| format!("writing temp file {}", temp_path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", temp_path.display()))?;
        }

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("finalizing account document {}", self.path.display()))?;
        Ok(())
    }

    /// Remove the first entry equal to `key` in both name and material.
    fn delete_sync(&self, key: &SshKey) -> Result<()> {
        let mut doc = self.load_sync()?;
        let position = doc
            .ssh_keys
            .iter()
            .position(|k| k == key)
            .with_context(|| format!("SSH key '{}' is no longer registered", key.name))?;
        doc.ssh_keys.remove(position);
        self.save_sync(&doc)
    }
}

impl AccountStore for FileAccountStore {
    async fn load(&self) -> Result<AccountDocument> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.load_sync())
            .await
            .context("account load task panicked")?
    }
}

impl KeyDeleter for FileAccountStore {
    async fn delete_key(&self, key: &SshKey) -> Result<()> {
        let store = self.clone();
        let key = key.clone();
        tokio::task::spawn_blocking(move || store.delete_sync(&key))
            .await
            .context("key delete task panicked")?
    }
}
