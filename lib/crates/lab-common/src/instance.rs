//! Read-only instance snapshot supplied by the platform.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an instance.
///
/// Accepts both the plain names (`ready`, `pending`, ...) and the platform's
/// `Vmi*` phase names. Anything unrecognised becomes `Unknown`, which is
/// never treated as ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstanceStatus {
    Pending,
    Running,
    Ready,
    Failed,
    Stopped,
    Unknown,
}

impl InstanceStatus {
    /// Parse a status name, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" | "importing" | "starting" | "vmipending" => Self::Pending,
            "running" | "vmirunning" => Self::Running,
            "ready" | "vmiready" => Self::Ready,
            "failed" | "creationloopbackoff" | "resourcequotaexceeded" => Self::Failed,
            "stopped" | "off" | "vmioff" => Self::Stopped,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Ready => "ready",
            Self::Failed => "failed",
            Self::Stopped => "stopped",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

impl From<String> for InstanceStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<InstanceStatus> for String {
    fn from(status: InstanceStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of workload backing an instance.
///
/// Parsed case-insensitively, ignoring `_`, `-` and spaces. Kinds this crate
/// does not know (e.g. `Standalone`) become `Unknown`, to which no
/// environment-specific rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnvironmentKind {
    Container,
    VirtualMachine,
    Unknown,
}

impl EnvironmentKind {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "container" => Self::Container,
            "virtualmachine" | "vm" => Self::VirtualMachine,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::VirtualMachine => "virtual_machine",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for EnvironmentKind {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<EnvironmentKind> for String {
    fn from(kind: EnvironmentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => f.write_str("container"),
            Self::VirtualMachine => f.write_str("virtual machine"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// One running workload as reported by the instance source.
///
/// Field names follow snake_case; the camelCase names used by the platform
/// API are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSnapshot {
    /// Instance identifier, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
    #[serde(
        default,
        alias = "environmentType",
        alias = "environment_type",
        alias = "environmentKind",
        skip_serializing_if = "Option::is_none"
    )]
    pub environment_kind: Option<EnvironmentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Base URL of the auxiliary services exposed by the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, alias = "templatePrettyName", alias = "templateName")]
    pub template_name: String,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl InstanceSnapshot {
    /// `true` only for an explicit `Ready` status; absent status is not ready.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status.is_some_and(InstanceStatus::is_ready)
    }
}
