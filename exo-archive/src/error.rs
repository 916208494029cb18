//! Errors raised while talking to the exoplanet archive.
//!
//! These never reach callers of the infallible fetch entry points; they are
//! logged per request and absorbed by the fallback chain. Only
//! [`ArchiveError::Cancelled`] is surfaced, by the `*_snapshot` variants.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection failures and timeouts
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to decode rows from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("fetch cancelled")]
    Cancelled,
}

impl ArchiveError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ArchiveError::Cancelled)
    }
}
