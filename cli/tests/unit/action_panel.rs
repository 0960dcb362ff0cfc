//! Tests for the `action_panel` application service.
//!
//! Effects are observed through mocked `UrlOpener` and a recording
//! `InstanceSurface`; nothing touches a browser or a terminal.

#![allow(clippy::expect_used)]

use chrono::{TimeZone, Utc};
use lab_cli::application::services::action_panel::{ActionPanel, IgnoreReason, InvokeOutcome};
use lab_cli::domain::LabConfig;
use lab_cli::domain::eligibility::{Action, FILES_AVAILABLE, SSH_UNSUPPORTED};
use lab_common::{EnvironmentKind, InstanceSnapshot, InstanceStatus};

use crate::mocks::{MockOpener, RecordingSurface, Shown};

fn snapshot(kind: EnvironmentKind, status: InstanceStatus, url: Option<&str>) -> InstanceSnapshot {
    InstanceSnapshot {
        name: Some("web-1".into()),
        status: Some(status),
        environment_kind: Some(kind),
        ip: Some("10.0.0.5".into()),
        url: url.map(str::to_string),
        template_name: "Ubuntu Desktop".into(),
        created_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).single().expect("valid timestamp")),
    }
}

fn opener_never_called() -> MockOpener {
    let mut opener = MockOpener::new();
    opener.expect_open_url().never();
    opener
}

#[test]
fn ready_container_opens_file_manager_at_mydrive_files() {
    let snap = snapshot(
        EnvironmentKind::Container,
        InstanceStatus::Ready,
        Some("https://x/"),
    );
    let config = LabConfig::default();
    let panel = ActionPanel::new(&snap, &config);

    let ssh = panel.describe(Action::Ssh);
    assert!(!ssh.enabled);
    assert_eq!(ssh.reason, SSH_UNSUPPORTED);
    assert_eq!(panel.describe(Action::FileManager).reason, FILES_AVAILABLE);

    let mut opener = MockOpener::new();
    opener
        .expect_open_url()
        .withf(|url| url == "https://x/mydrive/files")
        .times(1)
        .returning(|_| Ok(()));
    let surface = RecordingSurface::default();

    let outcome = panel.invoke(Action::FileManager, &surface, &opener);
    assert_eq!(
        outcome,
        InvokeOutcome::FileManagerOpened {
            url: "https://x/mydrive/files".into()
        }
    );
    assert!(surface.shown.borrow().is_empty());
}

#[test]
fn disabled_ssh_on_container_has_no_effect() {
    let snap = snapshot(
        EnvironmentKind::Container,
        InstanceStatus::Ready,
        Some("https://x/"),
    );
    let config = LabConfig::default();
    let panel = ActionPanel::new(&snap, &config);
    let surface = RecordingSurface::default();

    let outcome = panel.invoke(Action::Ssh, &surface, &opener_never_called());

    assert_eq!(outcome, InvokeOutcome::Ignored(IgnoreReason::Disabled));
    assert!(surface.shown.borrow().is_empty());
}

#[test]
fn nothing_is_invocable_while_instance_is_starting() {
    let snap = snapshot(
        EnvironmentKind::VirtualMachine,
        InstanceStatus::Pending,
        Some("https://x"),
    );
    let config = LabConfig::default();
    let panel = ActionPanel::new(&snap, &config);
    let surface = RecordingSurface::default();
    let opener = opener_never_called();

    for action in Action::ALL {
        assert_eq!(
            panel.invoke(action, &surface, &opener),
            InvokeOutcome::Ignored(IgnoreReason::Disabled),
            "{action} should be ignored"
        );
    }
    assert!(surface.shown.borrow().is_empty());
}

#[test]
fn info_shows_ip_creation_time_and_template() {
    let snap = snapshot(EnvironmentKind::VirtualMachine, InstanceStatus::Ready, None);
    let config = LabConfig::default();
    let panel = ActionPanel::new(&snap, &config);
    let surface = RecordingSurface::default();

    let outcome = panel.invoke(Action::Info, &surface, &opener_never_called());

    assert_eq!(outcome, InvokeOutcome::InfoShown);
    assert_eq!(
        surface.shown.borrow().as_slice(),
        [Shown::Info {
            ip: Some("10.0.0.5".into()),
            created_at: snap.created_at,
            template_name: "Ubuntu Desktop".into(),
        }]
    );
}

#[test]
fn ssh_on_ready_vm_shows_connection_instructions() {
    let snap = snapshot(EnvironmentKind::VirtualMachine, InstanceStatus::Ready, None);
    let config = LabConfig::default();
    let panel = ActionPanel::new(&snap, &config);
    let surface = RecordingSurface::default();

    let outcome = panel.invoke(Action::Ssh, &surface, &opener_never_called());

    assert_eq!(outcome, InvokeOutcome::ConnectionInstructionsShown);
    assert_eq!(
        surface.shown.borrow().as_slice(),
        [Shown::Instructions(Some("web-1".into()))]
    );
}

#[test]
fn opener_failure_still_reports_the_endpoint() {
    let snap = snapshot(
        EnvironmentKind::Container,
        InstanceStatus::Ready,
        Some("https://lab.example.org/i/7"),
    );
    let config = LabConfig::default();
    let panel = ActionPanel::new(&snap, &config);
    let mut opener = MockOpener::new();
    opener
        .expect_open_url()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("no browser")));

    let outcome = panel.invoke(Action::FileManager, &RecordingSurface::default(), &opener);

    assert_eq!(
        outcome,
        InvokeOutcome::FileManagerOpened {
            url: "https://lab.example.org/i/7/mydrive/files".into()
        }
    );
}

#[test]
fn container_without_url_cannot_open_file_manager() {
    let snap = snapshot(EnvironmentKind::Container, InstanceStatus::Ready, None);
    let config = LabConfig::default();
    let panel = ActionPanel::new(&snap, &config);

    assert!(!panel.describe(Action::FileManager).enabled);
    assert_eq!(
        panel.invoke(
            Action::FileManager,
            &RecordingSurface::default(),
            &opener_never_called()
        ),
        InvokeOutcome::Ignored(IgnoreReason::Disabled)
    );
}

#[test]
fn describe_all_lists_actions_in_display_order() {
    let snap = snapshot(
        EnvironmentKind::Container,
        InstanceStatus::Ready,
        Some("https://x"),
    );
    let config = LabConfig::default();
    let panel = ActionPanel::new(&snap, &config);

    let actions: Vec<Action> = panel.describe_all().into_iter().map(|(a, _)| a).collect();
    assert_eq!(actions, Action::ALL);
}

#[test]
fn decisions_follow_a_new_snapshot() {
    let config = LabConfig::default();
    let starting = snapshot(EnvironmentKind::VirtualMachine, InstanceStatus::Running, None);
    let ready = InstanceSnapshot {
        status: Some(InstanceStatus::Ready),
        ..starting.clone()
    };

    assert!(!ActionPanel::new(&starting, &config).describe(Action::Ssh).enabled);
    assert!(ActionPanel::new(&ready, &config).describe(Action::Ssh).enabled);
}
