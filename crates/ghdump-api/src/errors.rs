//! API error types.

use ghdump_core::{EntityKind, Username};

/// HTTP API error with status code and message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Network/transport error.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse API response: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ApiError {
    /// Check if this is a 404 Not Found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

/// Failure to list the repositories of an account.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ListError {
    /// The account does not exist.
    #[error("{kind} @{username} not found. Please check the username and try again.")]
    NotFound {
        /// Account kind that was queried.
        kind: EntityKind,
        /// Account that was queried.
        username: Username,
    },

    /// The listing request failed for any reason other than 404.
    #[error("{kind} @{username} could not be fetched. Please check the username and try again.")]
    Fetch {
        /// Account kind that was queried.
        kind: EntityKind,
        /// Account that was queried.
        username: Username,
        /// Underlying API failure.
        #[source]
        source: ApiError,
    },

    /// The account exists but has no public repositories.
    #[error("{kind} @{username} has no public repositories.")]
    NoRepositories {
        /// Account kind that was queried.
        kind: EntityKind,
        /// Account that was queried.
        username: Username,
    },
}

impl ListError {
    /// Classify an API failure for the given account.
    pub fn from_api(kind: EntityKind, username: Username, err: ApiError) -> Self {
        if err.is_not_found() {
            Self::NotFound { kind, username }
        } else {
            Self::Fetch {
                kind,
                username,
                source: err,
            }
        }
    }
}
