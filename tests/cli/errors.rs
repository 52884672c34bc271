//! Tests for error handling and CLI flags.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("--assets"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("reposeal "));
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_reposeal"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "#compdef reposeal");
}

#[test]
fn test_missing_assets_shows_hint() {
    let t = Test::new();
    t.write_actor(TOKEN);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
    assert_stderr_contains(&output, "--assets");
}

#[test]
fn test_log_env_var_accepted() {
    let t = Test::with_config(TOKEN, &[("acme", "svc")], &[("API_KEY", "abc123")]);

    let output = t
        .cmd()
        .env("REPOSEAL_LOG", "reposeal=debug")
        .arg("check")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "loading config");
    assert_output_excludes(&output, "abc123");
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::with_config(TOKEN, &[("acme", "svc")], &[("API_KEY", "abc123")]);

    let output = t.check();
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "default mode should not show debug/trace output"
    );
}
