use crate::models::LinkCheckResult;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;

/// Per-link request timeout.
const LINK_TIMEOUT: Duration = Duration::from_secs(5);

/// Number of link checks in flight at once. `buffered` keeps results in
/// input order, so parallelism never reorders the returned list.
const CONCURRENT_CHECKS: usize = 4;

/// Checks a batch of URLs with HEAD requests. Each link is independent:
/// a timeout or connection failure is recorded as `status: 0` with an
/// error message and never aborts the batch.
pub struct LinkChecker {
    client: Client,
}

impl LinkChecker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn check_urls(&self, urls: &[String]) -> Vec<LinkCheckResult> {
        stream::iter(urls)
            .map(|url| self.check_one(url))
            .buffered(CONCURRENT_CHECKS)
            .collect()
            .await
    }

    async fn check_one(&self, url: &str) -> LinkCheckResult {
        match self
            .client
            .head(url)
            .timeout(LINK_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => LinkCheckResult {
                url: url.to_string(),
                status: response.status().as_u16(),
                error: None,
            },
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Link check failed");
                LinkCheckResult {
                    url: url.to_string(),
                    status: 0,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
