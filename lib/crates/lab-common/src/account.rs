//! Account profile and SSH credential types.

use serde::{Deserialize, Serialize};

/// A named public key registered on the user's account.
///
/// Names are a display convention only; two entries may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SshKey {
    pub name: String,
    /// Key material, treated as opaque text.
    pub key: String,
}

impl SshKey {
    #[must_use]
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// Personal details shown in the profile panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(default, alias = "studentID", alias = "studentId")]
    pub student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserProfile {
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.trim(), self.last_name.trim()) {
            ("", last) => last.to_string(),
            (first, "") => first.to_string(),
            (first, last) => format!("{first} {last}"),
        }
    }
}

/// On-disk account document: profile plus registered keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDocument {
    pub profile: UserProfile,
    #[serde(default, alias = "sshKeys")]
    pub ssh_keys: Vec<SshKey>,
}
