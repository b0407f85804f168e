//! Git client that wraps the git command-line tool.

use std::ffi::OsStr;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::errors::GitError;

/// Something that can materialize a working copy of a remote repository.
pub trait Cloner: Send + Sync + std::fmt::Debug {
    /// Clone `clone_url` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone does not complete.
    fn clone_repository(
        &self,
        clone_url: &str,
        dest: &Path,
    ) -> impl Future<Output = Result<(), GitError>> + Send;
}

/// Git client backed by the system `git` binary.
#[derive(Debug, Clone)]
pub struct GitClient {
    /// Path to the git binary.
    git_path: PathBuf,
}

impl GitClient {
    /// Create a new git client using the system git.
    ///
    /// # Errors
    ///
    /// Returns an error if git is not found in PATH.
    pub fn new() -> Result<Self, GitError> {
        let git_path = which::which("git").map_err(|_| GitError::NotFound)?;
        Ok(Self { git_path })
    }

    #[cfg(test)]
    fn with_git_path(git_path: impl Into<PathBuf>) -> Self {
        Self {
            git_path: git_path.into(),
        }
    }

    /// Execute a git command and return stdout.
    ///
    /// Terminal credential prompts are disabled so a private or missing
    /// repository fails instead of blocking on input.
    #[instrument(skip(self), fields(args = ?args))]
    async fn run(&self, args: &[&OsStr]) -> Result<String, GitError> {
        let mut cmd = Command::new(&self.git_path);
        cmd.args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = cmd.output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let command = args
                .first()
                .map(|a| a.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(GitError::CommandFailed {
                command,
                message: stderr.trim().to_string(),
                exit_code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Clone a repository into `dest` with `git clone -- <url> <dest>`.
    ///
    /// # Errors
    ///
    /// Returns an error if git exits unsuccessfully or cannot be spawned.
    pub async fn clone(&self, clone_url: &str, dest: &Path) -> Result<(), GitError> {
        let args = [
            OsStr::new("clone"),
            OsStr::new("--"),
            OsStr::new(clone_url),
            dest.as_os_str(),
        ];
        self.run(&args).await?;
        debug!(url = clone_url, dest = %dest.display(), "Clone finished");
        Ok(())
    }
}

impl Cloner for GitClient {
    async fn clone_repository(&self, clone_url: &str, dest: &Path) -> Result<(), GitError> {
        self.clone(clone_url, dest).await
    }
}
