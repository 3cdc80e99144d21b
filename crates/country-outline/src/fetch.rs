//! Outbound article fetch.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::types::{OutlineError, OutlineResult};

/// Bound on the whole outbound request, so a stalled fetch cannot hold a
/// request slot indefinitely.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client used for all article fetches.
pub fn build_client() -> OutlineResult<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("country-outline/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| OutlineError::Unexpected(format!("failed to build HTTP client: {e}")))
}

/// Fetch the raw HTML of an article. Single attempt, no retries.
///
/// 2xx yields the body text; a remote 404 is classified as `NotFound` for
/// the given country; any other status or transport failure (DNS, timeout,
/// connection reset) is `FetchFailed`.
pub async fn fetch_article(client: &Client, url: &str, country: &str) -> OutlineResult<String> {
    debug!("fetching {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| OutlineError::FetchFailed(e.to_string()))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(OutlineError::NotFound(country.to_string()));
    }
    if !status.is_success() {
        return Err(OutlineError::FetchFailed(format!(
            "unexpected status {status} from {url}"
        )));
    }

    response
        .text()
        .await
        .map_err(|e| OutlineError::FetchFailed(e.to_string()))
}
