//! Tests for `reposeal check`.

use crate::support::*;

#[test]
fn test_check_lists_plan() {
    let t = Test::with_config(
        TOKEN,
        &[("acme", "svc"), ("acme", "web")],
        STANDARD_SECRETS,
    );

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "acme/svc");
    assert_stdout_contains(&output, "acme/web");
    assert_stdout_contains(&output, "DATABASE_URL");
    assert_stdout_contains(&output, "configuration is valid");
}

#[test]
fn test_check_never_prints_values() {
    let t = Test::with_config(TOKEN, &[("acme", "svc")], STANDARD_SECRETS);

    let output = t.cmd().args(["--verbose", "check"]).output().unwrap();
    assert_success(&output);
    assert_no_values_leaked(&output, STANDARD_SECRETS);
}

#[test]
fn test_check_custom_assets_dir() {
    let t = Test::with_config(TOKEN, &[("acme", "svc")], &[("API_KEY", "abc123")]);
    let moved = t.dir.path().join("elsewhere");
    std::fs::rename(t.assets(), &moved).unwrap();

    let output = t
        .cmd()
        .args(["check", "--assets"])
        .arg(&moved)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "acme/svc");
}

#[test]
fn test_check_token_from_env() {
    let t = Test::new();
    t.write_repositories(&[("acme", "svc")]);
    t.write_secrets(&[("API_KEY", "abc123")]);

    let output = t.cmd().env("GITHUB_TOKEN", "T").arg("check").output().unwrap();
    assert_success(&output);
}

#[test]
fn test_check_missing_token() {
    let t = Test::new();
    t.write_repositories(&[("acme", "svc")]);
    t.write_secrets(&[("API_KEY", "abc123")]);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "GITHUB_TOKEN");
}

#[test]
fn test_check_missing_secrets_file() {
    let t = Test::new();
    t.write_actor(TOKEN);
    t.write_repositories(&[("acme", "svc")]);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "secrets.json");
}

#[test]
fn test_check_duplicate_secret() {
    let t = Test::with_config(
        TOKEN,
        &[("acme", "svc")],
        &[("API_KEY", "a"), ("API_KEY", "b")],
    );

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "duplicate secret name: API_KEY");
}

#[test]
fn test_check_invalid_secret_name() {
    let t = Test::with_config(TOKEN, &[("acme", "svc")], &[("GITHUB_TOKEN", "x")]);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "reserved");
}

#[test]
fn test_check_malformed_json() {
    let t = Test::with_config(TOKEN, &[("acme", "svc")], &[]);
    t.write("repositories.json", "[{\"owner\": \"acme\"");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse");
}
