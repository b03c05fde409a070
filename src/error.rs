//! Fatal error taxonomy for a scan run.
//!
//! Anything that reaches one of these variants aborts the run and the process
//! exits non-zero. Degraded outcomes (no articles, missing fields) never
//! produce a `ScanError`; they are handled with placeholder text instead.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Transport-level failure: DNS, connect, timeout, or reading the body.
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a 2xx status.
    #[error("server returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// Building the HTTP client itself failed (bad TLS backend, bad header).
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ScanError::Status {
            url: "https://example.com/toc".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("https://example.com/toc"));
    }

    #[test]
    fn test_io_error_message_includes_path() {
        let err = ScanError::io(
            "/nope/reports",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nope/reports"));
        assert!(msg.contains("denied"));
    }
}
