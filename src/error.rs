//! Error types for the NBA tracker

use thiserror::Error;


pub type Result<T> = std::result::Result<T, TrackerError>;

/// Failure of a single upstream fetch.
///
/// Every caller in the render pipeline treats this as "no data from this
/// source" and degrades; it never aborts a render on its own.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    #[error("Upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Result set `{name}` missing from response")]
    MissingResultSet { name: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            let url = err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "<unknown>".to_string());
            return FetchError::Timeout { url };
        }
        if let Some(status) = err.status() {
            let url = err.url().map(|u| u.to_string()).unwrap_or_default();
            return FetchError::Status {
                status: status.as_u16(),
                url,
            };
        }
        FetchError::Http(err)
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid season `{season}` (expected e.g. 2025-26)")]
    InvalidSeason { season: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },
}
