//! Git-related error types.

/// Errors from git operations.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// Git command failed with an exit code.
    #[error("git {command} failed: {message}")]
    CommandFailed {
        /// The git subcommand that failed.
        command: String,
        /// Error message from stderr.
        message: String,
        /// Process exit code, if available.
        exit_code: Option<i32>,
    },

    /// Git binary not found.
    #[error("git executable not found in PATH")]
    NotFound,

    /// I/O error from subprocess.
    #[error("git IO error: {0}")]
    Io(#[from] std::io::Error),
}
