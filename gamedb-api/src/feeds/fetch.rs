//! Remote feed fetcher
//!
//! Issues a single GET per feed and parses the body as JSON. No retries;
//! failures surface as `Error::Fetch` and are handled at the route
//! boundary.

use gamedb_common::{Error, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("gamedb/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the top-app feeds
pub struct FeedClient {
    http_client: reqwest::Client,
}

impl FeedClient {
    pub fn new() -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;
        Ok(Self { http_client })
    }

    /// Fetch a feed document and parse it as JSON.
    ///
    /// The expected shape is a nested array of app descriptor objects;
    /// the normalizer deals with the nesting, so this returns the raw
    /// `Value`.
    pub async fn fetch_feed(&self, url: &str) -> Result<Value> {
        debug!(url = %url, "Fetching feed");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned status {}", url, status)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Fetch(format!("malformed JSON from {}: {}", url, e)))
    }
}
