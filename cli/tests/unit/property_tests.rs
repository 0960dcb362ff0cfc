//! Property-based tests for the action eligibility rules.
//!
//! Uses `proptest` to verify the rules across arbitrary snapshots.

#![allow(clippy::expect_used)]

use lab_cli::domain::eligibility::{Action, resolve, resolve_all};
use lab_cli::domain::{validate_config_key, validate_config_value};
use lab_common::{EnvironmentKind, InstanceSnapshot, InstanceStatus};
use proptest::prelude::*;

fn any_status() -> impl Strategy<Value = Option<InstanceStatus>> {
    proptest::option::of(prop_oneof![
        Just(InstanceStatus::Pending),
        Just(InstanceStatus::Running),
        Just(InstanceStatus::Ready),
        Just(InstanceStatus::Failed),
        Just(InstanceStatus::Stopped),
        Just(InstanceStatus::Unknown),
    ])
}

fn any_kind() -> impl Strategy<Value = Option<EnvironmentKind>> {
    proptest::option::of(prop_oneof![
        Just(EnvironmentKind::Container),
        Just(EnvironmentKind::VirtualMachine),
        Just(EnvironmentKind::Unknown),
    ])
}

fn any_snapshot() -> impl Strategy<Value = InstanceSnapshot> {
    (
        any_status(),
        any_kind(),
        proptest::option::of("https://[a-z]{1,8}\\.example\\.org(/[a-z0-9]{1,6}){0,2}/?"),
        proptest::option::of("10\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}"),
    )
        .prop_map(|(status, environment_kind, url, ip)| InstanceSnapshot {
            name: Some("instance".into()),
            status,
            environment_kind,
            ip,
            url,
            ..InstanceSnapshot::default()
        })
}

proptest! {
    /// Resolving twice gives the same answer for every action.
    #[test]
    fn prop_resolve_is_deterministic(snapshot in any_snapshot()) {
        prop_assert_eq!(resolve_all(&snapshot), resolve_all(&snapshot));
    }

    /// Every decision carries an explanation, enabled or not.
    #[test]
    fn prop_every_decision_has_a_reason(snapshot in any_snapshot()) {
        for (action, decision) in resolve_all(&snapshot) {
            prop_assert!(!decision.reason.trim().is_empty(), "{} has empty reason", action);
        }
    }

    /// Containers never offer SSH.
    #[test]
    fn prop_container_never_offers_ssh(snapshot in any_snapshot()) {
        if snapshot.environment_kind == Some(EnvironmentKind::Container) {
            prop_assert!(!resolve(&snapshot, Action::Ssh).enabled);
        }
    }

    /// Virtual machines never offer the file manager.
    #[test]
    fn prop_vm_never_offers_file_manager(snapshot in any_snapshot()) {
        if snapshot.environment_kind == Some(EnvironmentKind::VirtualMachine) {
            prop_assert!(!resolve(&snapshot, Action::FileManager).enabled);
        }
    }

    /// Info is available exactly when the instance is ready.
    #[test]
    fn prop_info_enabled_iff_ready(snapshot in any_snapshot()) {
        prop_assert_eq!(resolve(&snapshot, Action::Info).enabled, snapshot.is_ready());
    }

    /// Nothing is enabled on an instance that is not ready.
    #[test]
    fn prop_not_ready_disables_everything(snapshot in any_snapshot()) {
        if !snapshot.is_ready() {
            for (action, decision) in resolve_all(&snapshot) {
                prop_assert!(!decision.enabled, "{} enabled while not ready", action);
            }
        }
    }

    /// An enabled file manager always has an endpoint to open.
    #[test]
    fn prop_enabled_file_manager_has_url(snapshot in any_snapshot()) {
        if resolve(&snapshot, Action::FileManager).enabled {
            prop_assert!(snapshot.url.as_deref().is_some_and(|u| !u.trim().is_empty()));
        }
    }
}

proptest! {
    /// Keys outside the whitelist are rejected.
    #[test]
    fn prop_arbitrary_keys_rejected(key in "[a-z]{1,12}\\.[a-z]{1,12}") {
        prop_assume!(key != "file_manager.path" && key != "ssh.guide_url");
        prop_assert!(validate_config_key(&key).is_err());
    }

    /// Any http(s) guide URL is accepted.
    #[test]
    fn prop_http_guide_urls_accepted(host in "[a-z]{1,12}", path in "[a-z0-9/]{0,16}") {
        let url = format!("https://{host}.org/{path}");
        prop_assert!(validate_config_value("ssh.guide_url", &url).is_ok());
    }
}
