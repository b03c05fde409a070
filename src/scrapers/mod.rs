//! Fetching and scraping of journal table-of-contents pages.
//!
//! The scan is a two-step affair:
//!
//! 1. **Fetching**: [`fetch_html`] issues exactly one GET for the TOC page
//! 2. **Extraction**: [`msb::extract_articles`] walks the parsed document
//!    and builds one [`ArticleRecord`](crate::models::ArticleRecord) per
//!    article unit
//!
//! There is no retry: a failed fetch is fatal for the run.

pub mod msb;

use crate::error::ScanError;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Publisher sites reject reqwest's default identifier, so present as a
/// desktop Chrome.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Knobs for the HTTP client.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

/// Build the client used for the TOC fetch.
///
/// Sends browser-like `Accept` headers alongside the user agent and keeps
/// reqwest's default redirect policy.
pub fn http_client(opts: &FetchOptions) -> Result<Client, ScanError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

    Client::builder()
        .user_agent(opts.user_agent.as_str())
        .default_headers(headers)
        .timeout(opts.timeout)
        .build()
        .map_err(ScanError::Client)
}

/// Fetch a page and return its body as text.
///
/// # Errors
///
/// - [`ScanError::Network`] on transport failures (DNS, connect, timeout,
///   body read)
/// - [`ScanError::Status`] when the server answers with a non-2xx status
#[instrument(level = "info", skip(client))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ScanError> {
    let network = |source: reqwest::Error| ScanError::Network {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(network)?;
    let status = response.status();
    debug!(%status, "Received response");
    if !status.is_success() {
        return Err(ScanError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(network)?;
    info!(bytes = body.len(), "Fetched page");
    Ok(body)
}
