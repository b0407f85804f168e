//! Factory for shared command dependencies.
//!
//! Provides lazy initialization of the git client and construction of the
//! API client and prompter. Supports test mode with dependency injection
//! for isolated testing.

use std::sync::{Arc, OnceLock};

use ghdump_api::http::{HttpClientOptions, build_client};
use ghdump_core::iostreams::{IOStreams, TestOutput};
use ghdump_core::prompter::{DialoguerPrompter, Prompter, StubPrompter};
use ghdump_git::GitClient;

/// Shared factory providing lazily-initialized dependencies to commands.
///
/// In production mode, dependencies are created from the real system.
/// In test mode, dependencies can be injected for isolated testing.
pub struct Factory {
    /// Application version.
    pub app_version: String,
    /// I/O streams.
    pub io: IOStreams,
    /// Git client (lazily loaded).
    git_client: OnceLock<GitClient>,

    // Test overrides
    http_override: Option<reqwest::Client>,
    api_url_override: Option<String>,
    prompter_stub: Option<Arc<StubPrompter>>,
}

impl std::fmt::Debug for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("app_version", &self.app_version)
            .field("api_url_override", &self.api_url_override)
            .finish_non_exhaustive()
    }
}

impl Factory {
    /// Create a new factory with the given version.
    pub fn new(app_version: String) -> Self {
        Self {
            app_version,
            io: IOStreams::system(),
            git_client: OnceLock::new(),
            http_override: None,
            api_url_override: None,
            prompter_stub: None,
        }
    }

    /// Create a test factory with captured I/O.
    ///
    /// Returns the factory and a `TestOutput` for reading captured
    /// stdout/stderr.
    pub fn test() -> (Self, TestOutput) {
        let (io, output) = IOStreams::test_with_output();

        let factory = Self {
            app_version: "test".to_string(),
            io,
            git_client: OnceLock::new(),
            http_override: None,
            api_url_override: None,
            prompter_stub: None,
        };

        (factory, output)
    }

    /// Set a custom reqwest HTTP client (e.g., backed by wiremock).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_override = Some(client);
        self
    }

    /// Set an API URL override (wiremock server URI).
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url_override = Some(url.into());
        self
    }

    /// Set a stub prompter and return the shared reference for configuration.
    pub fn with_stub_prompter(mut self) -> (Self, Arc<StubPrompter>) {
        let stub = Arc::new(StubPrompter::default());
        self.prompter_stub = Some(stub.clone());
        (self, stub)
    }

    /// Get the git client.
    ///
    /// # Errors
    ///
    /// Returns an error if git is not available.
    pub fn git_client(&self) -> anyhow::Result<&GitClient> {
        if let Some(client) = self.git_client.get() {
            return Ok(client);
        }
        let client = GitClient::new()?;
        let _ = self.git_client.set(client);
        self.git_client
            .get()
            .ok_or_else(|| anyhow::anyhow!("failed to initialize git client"))
    }

    /// Create a prompter instance.
    ///
    /// In test mode with a stub prompter, returns the stub.
    pub fn prompter(&self) -> Box<dyn Prompter> {
        if let Some(ref stub) = self.prompter_stub {
            return Box::new(StubPrompterWrapper(stub.clone()));
        }
        Box::new(DialoguerPrompter::new())
    }

    /// Build an API client.
    ///
    /// In test mode, uses the injected HTTP client and URL override.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn api_client(&self) -> anyhow::Result<ghdump_api::Client> {
        let http = if let Some(ref client) = self.http_override {
            client.clone()
        } else {
            build_client(&HttpClientOptions {
                app_version: self.app_version.clone(),
            })?
        };

        let mut client = ghdump_api::Client::new(http);
        if let Some(ref url) = self.api_url_override {
            client = client.with_url_override(url.clone());
        }
        Ok(client)
    }
}

/// Wrapper to use `Arc<StubPrompter>` as `Box<dyn Prompter>`.
#[derive(Debug)]
struct StubPrompterWrapper(Arc<StubPrompter>);

impl Prompter for StubPrompterWrapper {
    fn select(
        &self,
        prompt: &str,
        default: Option<usize>,
        options: &[String],
    ) -> anyhow::Result<usize> {
        self.0.select(prompt, default, options)
    }

    fn input(&self, prompt: &str, default: &str) -> anyhow::Result<String> {
        self.0.input(prompt, default)
    }
}
