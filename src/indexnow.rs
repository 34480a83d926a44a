use crate::models::IndexNowOutcome;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use url::Url;

const INDEXNOW_ENDPOINT: &str = "https://api.indexnow.org/indexnow";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexNowRequest<'a> {
    host: &'a str,
    key: &'a str,
    key_location: String,
    url_list: Vec<String>,
}

/// Submits URLs to the IndexNow endpoint to request re-crawling. Without a
/// key this reports "not configured" and never touches the network.
pub struct IndexNowClient {
    client: Client,
    api_key: Option<String>,
    key_location: Option<String>,
}

impl IndexNowClient {
    pub fn new(client: Client, api_key: Option<String>, key_location: Option<String>) -> Self {
        Self {
            client,
            api_key,
            key_location,
        }
    }

    pub async fn submit(&self, urls: &[String]) -> Result<IndexNowOutcome> {
        let Some(key) = &self.api_key else {
            return Ok(IndexNowOutcome {
                success: false,
                message: "IndexNow API key not configured".to_string(),
            });
        };

        let first = urls.first().context("No URLs to submit")?;
        let host = Url::parse(first)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .with_context(|| format!("Cannot derive host from URL: {}", first))?;

        let key_location = self
            .key_location
            .clone()
            .unwrap_or_else(|| format!("https://{}/{}.txt", host, key));

        let body = IndexNowRequest {
            host: &host,
            key,
            key_location,
            url_list: urls.to_vec(),
        };

        let response = self
            .client
            .post(INDEXNOW_ENDPOINT)
            .json(&body)
            .send()
            .await
            .context("IndexNow request failed")?;

        // Success is solely "HTTP OK"; the endpoint returns no useful body.
        if response.status().is_success() {
            Ok(IndexNowOutcome {
                success: true,
                message: format!("Submitted {} URL(s) to IndexNow", urls.len()),
            })
        } else {
            Ok(IndexNowOutcome {
                success: false,
                message: format!("IndexNow rejected submission: HTTP {}", response.status()),
            })
        }
    }
}
