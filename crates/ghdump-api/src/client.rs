//! GitHub REST API client.
//!
//! Unauthenticated REST access with status-to-error mapping and a base URL
//! override for GitHub Enterprise hosts and test servers.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ApiError;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com/";

/// GitHub API client wrapping reqwest with error handling.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Optional base URL override (e.g., `"http://127.0.0.1:PORT/"`).
    /// When set, REST requests use this instead of the public GitHub API.
    api_url_override: Option<String>,
}

impl Client {
    /// Create a new API client for the public GitHub API.
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            api_url_override: None,
        }
    }

    /// Set a base URL override.
    ///
    /// A trailing slash is added when missing, so both
    /// `"http://127.0.0.1:8080"` and `"http://127.0.0.1:8080/"` work.
    #[must_use]
    pub fn with_url_override(mut self, url: String) -> Self {
        let url = if url.ends_with('/') {
            url
        } else {
            format!("{url}/")
        };
        self.api_url_override = Some(url);
        self
    }

    /// Base URL all relative paths are resolved against.
    pub fn base_url(&self) -> &str {
        self.api_url_override.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Execute a REST GET request and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or a body
    /// that does not decode into `T`.
    pub async fn rest_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.resolve_rest_url(path);
        debug!(%url, "GET");
        let resp = self.http.get(&url).send().await?;
        let resp = Self::check_response(resp).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Return an `ApiError::Http` if the status is not successful.
    ///
    /// A 404 is classified from the status alone; its body is never read.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = if status == StatusCode::NOT_FOUND {
            status.canonical_reason().unwrap_or("Not Found").to_string()
        } else {
            resp.text().await.unwrap_or_default()
        };
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    fn resolve_rest_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path.trim_start_matches('/'))
    }
}
