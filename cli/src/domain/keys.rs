//! SSH key inventory value types.
//!
//! Pure data only. The stateful inventory lives in
//! `application::services::key_inventory`.

use std::fmt;

use lab_common::SshKey;
use serde::Serialize;

/// Guidance shown instead of a table when no key is registered.
pub const EMPTY_KEYS_MESSAGE: &str = "It seems that you don't have any SSH key registered";
pub const EMPTY_KEYS_HINT: &str = "If you don't know how to generate and upload a new key, follow this guide:";

/// Identifies one row of the inventory, independent of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct KeyId(u64);

impl KeyId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    pub id: KeyId,
    #[serde(flatten)]
    pub key: SshKey,
}

/// What the key table should render.
///
/// An empty inventory is a recognised state with its own guidance, never an
/// empty grid, and never carries a delete control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum KeyListView {
    Empty { guide_url: String },
    Rows { keys: Vec<KeyEntry> },
}

impl KeyListView {
    #[must_use]
    pub fn from_entries(entries: Vec<KeyEntry>, guide_url: &str) -> Self {
        if entries.is_empty() {
            Self::Empty {
                guide_url: guide_url.to_string(),
            }
        } else {
            Self::Rows { keys: entries }
        }
    }

    /// Whether a per-row delete control may be rendered.
    #[must_use]
    pub fn shows_delete_control(&self) -> bool {
        matches!(self, Self::Rows { keys } if !keys.is_empty())
    }

    #[must_use]
    pub fn rows(&self) -> &[KeyEntry] {
        match self {
            Self::Empty { .. } => &[],
            Self::Rows { keys } => keys,
        }
    }
}

/// Shorten `text` to at most `max` characters, ending with `…` when cut.
#[must_use]
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}
