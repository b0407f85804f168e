//! End-to-end tests for the `ghdump` binary.
//!
//! Every run is non-interactive: answers come from flags and the API is a
//! local wiremock server, so no test touches the network or needs git.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary command with a clean environment.
fn ghdump() -> Command {
    let mut cmd = Command::cargo_bin("ghdump").expect("binary exists");
    cmd.env("NO_COLOR", "1")
        .env_remove("GHDUMP_KIND")
        .env_remove("GHDUMP_USERNAME")
        .env_remove("GHDUMP_OUTPUT_DIR")
        .env_remove("GHDUMP_API_URL")
        .env_remove("GHDUMP_DEBUG");
    cmd
}

#[test]
fn test_should_print_help() {
    ghdump()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--username"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_should_reject_invalid_username_before_any_request() {
    let out = tempfile::tempdir().unwrap();

    ghdump()
        .args(["--kind", "user", "--username", "not a user!"])
        .arg("--output-dir")
        .arg(out.path())
        .arg("--api-url")
        .arg("http://127.0.0.1:9")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("GitHub Repository Cloner"))
        .stdout(predicate::str::contains("Fetching").not())
        .stderr(predicate::str::contains(
            "Please enter a valid GitHub username.",
        ));

    assert!(std::fs::read_dir(out.path()).unwrap().next().is_none());
}

#[test]
fn test_should_exit_with_error_for_unknown_kind() {
    ghdump()
        .env("GHDUMP_KIND", "team")
        .args(["--username", "octocat"])
        .arg("--api-url")
        .arg("http://127.0.0.1:9")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Fetching").not())
        .stderr(predicate::str::contains("unknown account type \"team\""));

    ghdump()
        .args(["--kind", "team", "--username", "octocat"])
        .arg("--api-url")
        .arg("http://127.0.0.1:9")
        .assert()
        .code(1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_should_exit_with_error_when_account_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/no-such-org/repos"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let out = tempfile::tempdir().unwrap();

    ghdump()
        .args(["--kind", "organization", "--username", "@no-such-org"])
        .arg("--output-dir")
        .arg(out.path())
        .arg("--api-url")
        .arg(server.uri())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Fetching organization repositories for @no-such-org...",
        ))
        .stderr(predicate::str::contains(
            "Organization @no-such-org not found. Please check the username and try again.",
        ));

    assert!(!out.path().join("organization_no-such-org").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_should_exit_with_error_when_account_has_no_repositories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let out = tempfile::tempdir().unwrap();

    ghdump()
        .env("GHDUMP_KIND", "user")
        .env("GHDUMP_USERNAME", "octocat")
        .env("GHDUMP_OUTPUT_DIR", out.path())
        .env("GHDUMP_API_URL", server.uri())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "User @octocat has no public repositories.",
        ))
        .stdout(predicate::str::contains("All repositories cloned successfully.").not());

    assert!(!out.path().join("user_octocat").exists());
}
