//! HTTP utilities for NBA endpoint communication

use crate::{error::TrackerError, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use std::time::Duration;

/// stats.nba.com rejects requests that do not look like they came from the
/// nba.com site; the live CDN accepts anything.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Build the common headers sent with every request.
pub fn common_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    Ok(h)
}

/// Build the shared client: common headers plus a bounded per-request timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .default_headers(common_headers()?)
        .timeout(timeout)
        .build()
        .map_err(TrackerError::Client)
}
