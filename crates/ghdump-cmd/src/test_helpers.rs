//! Shared test utilities for command testing.
//!
//! Provides a factory-backed harness, a recording fake cloner, and
//! wiremock helpers for the listing endpoint.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use ghdump_api::RepositoryDescriptor;
use ghdump_core::iostreams::TestOutput;
use ghdump_core::prompter::StubPrompter;
use ghdump_core::{EntityKind, UserSelection, Username};
use ghdump_git::{Cloner, GitError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::dump::manifest::MANIFEST_FILE;
use crate::factory::Factory;

/// A fully-configured test harness with factory, output capture, and mock server.
#[derive(Debug)]
pub struct TestHarness {
    /// The factory configured for testing.
    pub factory: Factory,
    /// Captured stdout/stderr output.
    pub output: TestOutput,
    /// Wiremock mock server for API requests.
    pub server: MockServer,
    /// Stub prompter for providing test answers.
    pub prompter: Arc<StubPrompter>,
}

impl TestHarness {
    /// Create a new test harness routing API requests to a fresh mock server.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let (factory, output) = Factory::test();
        let (factory, prompter) = factory.with_stub_prompter();
        let factory = factory
            .with_http_client(reqwest::Client::new())
            .with_api_url(format!("{}/", server.uri()));

        Self {
            factory,
            output,
            server,
            prompter,
        }
    }

    /// Queue answers for the account-type and username prompts.
    pub fn answer(&self, kind_index: usize, username: &str) {
        self.prompter
            .select_answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(kind_index);
        self.prompter
            .input_answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(username.to_string());
    }

    /// Get captured stdout as a string.
    pub fn stdout(&self) -> String {
        self.output.stdout()
    }

    /// Get captured stderr as a string.
    pub fn stderr(&self) -> String {
        self.output.stderr()
    }

    /// Number of requests the mock server has seen.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// Cloner that records its calls instead of running git.
#[derive(Debug, Default)]
pub struct FakeCloner {
    calls: Mutex<Vec<(String, PathBuf)>>,
    manifest_seen: Mutex<Vec<bool>>,
    fail_at: Option<usize>,
}

impl FakeCloner {
    /// A cloner whose call at `index` (zero-based) fails.
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    /// Recorded `(clone_url, dest)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// For each call, whether the manifest already existed next to `dest`.
    pub fn manifest_seen(&self) -> Vec<bool> {
        self.manifest_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Cloner for FakeCloner {
    async fn clone_repository(&self, clone_url: &str, dest: &Path) -> Result<(), GitError> {
        let index = {
            let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
            calls.push((clone_url.to_string(), dest.to_path_buf()));
            calls.len() - 1
        };
        let seen = dest
            .parent()
            .is_some_and(|dir| dir.join(MANIFEST_FILE).exists());
        self.manifest_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(seen);

        if self.fail_at == Some(index) {
            return Err(GitError::CommandFailed {
                command: "clone".to_string(),
                message: "fake failure".to_string(),
                exit_code: Some(128),
            });
        }
        std::fs::create_dir_all(dest)?;
        Ok(())
    }
}

/// Build a selection from a kind keyword and a username.
pub fn selection(kind: &str, username: &str) -> UserSelection {
    UserSelection::new(
        kind.parse::<EntityKind>().unwrap(),
        Username::parse(username).unwrap(),
    )
}

/// Build a descriptor with GitHub-shaped URLs.
pub fn repo_descriptor(owner: &str, name: &str) -> RepositoryDescriptor {
    RepositoryDescriptor {
        name: name.to_string(),
        clone_url: format!("https://github.com/{owner}/{name}.git")
            .parse()
            .unwrap(),
        html_url: format!("https://github.com/{owner}/{name}").parse().unwrap(),
    }
}

/// JSON for one repository as the REST listing returns it.
pub fn repo_json(owner: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "private": false,
        "html_url": format!("https://github.com/{owner}/{name}"),
        "clone_url": format!("https://github.com/{owner}/{name}.git"),
        "fork": false
    })
}

/// Mount a REST GET response mock for a specific path.
pub async fn mock_rest_get(server: &MockServer, url_path: &str, response_body: serde_json::Value) {
    mock_rest_get_status(server, url_path, 200, response_body).await;
}

/// Mount a REST GET response mock that returns a specific status code.
pub async fn mock_rest_get_status(
    server: &MockServer,
    url_path: &str,
    status: u16,
    response_body: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .mount(server)
        .await;
}
