//! Shared fixtures for integration tests.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const PROFILE: &str = "\
profile:
  first_name: Ada
  last_name: Lovelace
  username: ada
  email: ada@example.org
  student_id: s123456
";

/// Isolated lab home: config and account document live in a temp dir.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    /// Sandbox with an account document holding `keys` as `(name, key)`.
    pub fn with_keys(keys: &[(&str, &str)]) -> Self {
        let sandbox = Self::new();
        let mut doc = PROFILE.to_string();
        if keys.is_empty() {
            doc.push_str("ssh_keys: []\n");
        } else {
            doc.push_str("ssh_keys:\n");
            for (name, key) in keys {
                doc.push_str(&format!("  - name: {name}\n    key: {key}\n"));
            }
        }
        std::fs::write(sandbox.account_path(), doc).expect("write account");
        sandbox
    }

    pub fn account_path(&self) -> PathBuf {
        self.dir.path().join("account.yaml")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.yaml")
    }

    /// Write a snapshot file and return its path.
    pub fn snapshot(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(file_name);
        std::fs::write(&path, content).expect("write snapshot");
        path
    }

    pub fn read_account(&self) -> String {
        std::fs::read_to_string(self.account_path()).expect("read account")
    }

    /// `lab` command wired to this sandbox.
    pub fn lab(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lab"));
        cmd.env("NO_COLOR", "1")
            .env("LAB_CONFIG", self.config_path())
            .env("LAB_ACCOUNT", self.account_path())
            .env("BROWSER", "true")
            .env_remove("LAB_YES")
            .env_remove("CI")
            .env_remove("LAB_LOG");
        cmd
    }
}

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
