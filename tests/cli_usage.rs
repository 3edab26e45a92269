//! Behavioural tests for the `gangplank` binary surface.
//!
//! These exercise the process boundary: argument handling, environment
//! validation, and exit codes. The only network-touching case points at a
//! closed local port so the connection fails immediately.

use assert_cmd::Command;
use predicates::prelude::*;

const ALL_VARS: [&str; 5] = [
    "PORTAINER_URL",
    "PORTAINER_USERNAME",
    "PORTAINER_PASSWORD",
    "STACK_NAME",
    "COMPOSE_CONTENT",
];

/// Returns a command with every deployment variable scrubbed from the
/// inherited environment.
fn bare_command() -> Command {
    let mut cmd = Command::cargo_bin("gangplank").expect("binary builds");
    for var in ALL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_documents_the_remove_flag() {
    bare_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--remove"));
}

#[test]
fn positional_arguments_are_a_usage_error() {
    bare_command()
        .arg("extra")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn unknown_flags_are_a_usage_error() {
    bare_command().arg("--force").assert().failure();
}

#[test]
fn empty_environment_exits_listing_every_variable() {
    let assert = bare_command().assert().failure().code(1);
    let output = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    for var in ALL_VARS {
        assert!(output.contains(var), "output should list {var}: {output}");
    }
}

#[test]
fn deploy_mode_reports_missing_compose_content() {
    bare_command()
        .env("PORTAINER_URL", "https://portainer.example.com")
        .env("PORTAINER_USERNAME", "admin")
        .env("PORTAINER_PASSWORD", "hunter2")
        .env("STACK_NAME", "web")
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("COMPOSE_CONTENT")
                .and(predicate::str::contains("PORTAINER_URL").not()),
        );
}

#[test]
fn remove_mode_accepts_missing_compose_content() {
    // Configuration passes without COMPOSE_CONTENT; the run then fails at
    // the authentication call because nothing listens on the target port.
    bare_command()
        .arg("--remove")
        .env("PORTAINER_URL", "http://127.0.0.1:1")
        .env("PORTAINER_USERNAME", "admin")
        .env("PORTAINER_PASSWORD", "hunter2")
        .env("STACK_NAME", "web")
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("authentication")
                .and(predicate::str::contains("COMPOSE_CONTENT").not()),
        );
}
