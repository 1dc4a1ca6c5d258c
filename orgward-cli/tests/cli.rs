//! Integration tests for the orgward binary

use std::process::Command;

fn orgward(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_orgward"))
        .args(args)
        .output()
        .expect("Failed to run orgward")
}

/// Test that orgward --help lists the commands
#[test]
fn orgward_help_lists_commands() {
    let output = orgward(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Role-based access control"));
    assert!(stdout.contains("roles"));
    assert!(stdout.contains("serve"));
}

#[test]
fn roles_verify_succeeds() {
    let output = orgward(&["roles", "--verify"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("organization:manage_billing"));
    assert!(stdout.contains("Role hierarchy is consistent"));
}

#[test]
fn check_prints_json_decisions() {
    let output = orgward(&["check", "--role", "viewer", "post:view", "post:create"]);

    assert!(output.status.success());
    let decisions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(decisions[0]["hasPermission"], true);
    assert_eq!(decisions[1]["hasPermission"], false);
    assert_eq!(
        decisions[1]["reason"],
        "Role 'viewer' does not have permission 'post:create'"
    );
}

#[test]
fn access_reports_invalid_combination() {
    let output = orgward(&["access", "--role", "owner", "project", "manage"]);

    assert!(output.status.success());
    let decision: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(decision["hasPermission"], false);
    assert_eq!(
        decision["reason"],
        "Invalid resource/action combination: project:manage"
    );
}

#[test]
fn unknown_role_fails() {
    let output = orgward(&["summary", "--role", "superuser"]);
    assert!(!output.status.success());
}
