use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Public CORS relay that wraps the target response in a JSON envelope.
const DEFAULT_PROXY_ENDPOINT: &str = "https://api.allorigins.win/get";

/// Both fetch attempts failed; carries the underlying cause so the caller
/// can surface a single clear message.
#[derive(Debug, Error)]
#[error("Failed to fetch website: {cause}")]
pub struct FetchError {
    pub cause: String,
}

/// One way of obtaining the raw HTML of a page. Strategies are tried in
/// order; appending a new one (another proxy, an authenticated fetch) does
/// not require touching the fallback logic.
#[derive(Debug, Clone)]
pub enum FetchStrategy {
    /// Direct cross-origin GET to the target.
    Direct,
    /// GET through a CORS relay that returns `{"contents": "..."}`.
    CorsProxy { endpoint: String },
}

#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: Option<String>,
}

impl FetchStrategy {
    fn name(&self) -> &'static str {
        match self {
            FetchStrategy::Direct => "direct",
            FetchStrategy::CorsProxy { .. } => "cors-proxy",
        }
    }

    async fn fetch(&self, client: &Client, url: &str) -> Result<String, String> {
        match self {
            FetchStrategy::Direct => {
                let response = client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| e.to_string())?;
                if !response.status().is_success() {
                    return Err(format!("HTTP {}", response.status().as_u16()));
                }
                response.text().await.map_err(|e| e.to_string())
            }
            FetchStrategy::CorsProxy { endpoint } => {
                let proxy_url = format!("{}?url={}", endpoint, urlencoding::encode(url));
                let response = client
                    .get(&proxy_url)
                    .send()
                    .await
                    .map_err(|e| e.to_string())?;
                if !response.status().is_success() {
                    return Err(format!("proxy HTTP {}", response.status().as_u16()));
                }
                let envelope: ProxyEnvelope =
                    response.json().await.map_err(|e| e.to_string())?;
                envelope
                    .contents
                    .ok_or_else(|| "proxy response missing contents field".to_string())
            }
        }
    }
}

/// Resolves a target and fetches its HTML by walking an ordered list of
/// strategies. The client is injected; no global state.
pub struct Fetcher {
    client: Client,
    strategies: Vec<FetchStrategy>,
}

impl Fetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            strategies: vec![
                FetchStrategy::Direct,
                FetchStrategy::CorsProxy {
                    endpoint: DEFAULT_PROXY_ENDPOINT.to_string(),
                },
            ],
        }
    }

    /// Replace the strategy chain, keeping the order significant.
    pub fn with_strategies(client: Client, strategies: Vec<FetchStrategy>) -> Self {
        Self { client, strategies }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetches the raw HTML of `url_or_domain`, normalizing bare domains
    /// first. Fails only after every strategy has failed.
    pub async fn fetch_html(&self, url_or_domain: &str) -> Result<String, FetchError> {
        let url = normalize_url(url_or_domain);
        let mut last_error = String::from("no fetch strategies configured");

        for strategy in &self.strategies {
            match strategy.fetch(&self.client, &url).await {
                Ok(html) => {
                    tracing::debug!(url = %url, strategy = strategy.name(), "Fetched page");
                    return Ok(html);
                }
                Err(e) => {
                    tracing::warn!(
                        url = %url,
                        strategy = strategy.name(),
                        error = %e,
                        "Fetch strategy failed"
                    );
                    last_error = e;
                }
            }
        }

        Err(FetchError { cause: last_error })
    }
}

/// Coerces a bare domain or scheme-less URL into absolute `https://` form.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
