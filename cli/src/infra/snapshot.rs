//! Instance snapshot loading.
//!
//! Snapshots come from the platform already resolved; this only parses them.

use std::io::Read as _;
use std::path::Path;

use anyhow::{Context, Result};
use lab_common::InstanceSnapshot;

/// Read a snapshot from `path`, or from stdin when `path` is `-`.
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed.
pub fn load_snapshot(path: &Path) -> Result<InstanceSnapshot> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("reading snapshot from stdin")?;
        return parse_snapshot(&content, false).context("parsing snapshot from stdin");
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_snapshot(&content, is_json).with_context(|| format!("parsing snapshot {}", path.display()))
}

/// Parse snapshot text. YAML parsing also accepts JSON documents.
///
/// # Errors
///
/// Returns an error if the text is not a valid snapshot document.
pub fn parse_snapshot(content: &str, is_json: bool) -> Result<InstanceSnapshot> {
    if is_json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_yaml::from_str(content)?)
    }
}
