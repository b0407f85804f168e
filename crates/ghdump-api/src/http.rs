//! HTTP client construction.
//!
//! Provides default headers (User-Agent, Accept) for every request.

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

/// Media type requested from the GitHub REST API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Options for constructing an HTTP client.
#[derive(Debug)]
pub struct HttpClientOptions {
    /// Application version for User-Agent.
    pub app_version: String,
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// User-Agent header value for a given version.
pub fn user_agent(app_version: &str) -> String {
    format!("ghdump {app_version}")
}

/// Build a reqwest client with default configuration.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed.
pub fn build_client(opts: &HttpClientOptions) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(&user_agent(&opts.app_version))?,
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

    debug!(version = %opts.app_version, "Building HTTP client");

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    Ok(client)
}
