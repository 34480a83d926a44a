use anyhow::Result;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

/// User-agent announced on every outbound request.
pub const USER_AGENT: &str = "B3ACON SEO Bot/1.0";

/// Builds the shared reqwest client. Constructed once at startup and
/// passed to every component that does I/O.
pub fn build_http_client(timeout_secs: u64) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, "*/*".parse().unwrap());
    headers.insert(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9".parse().unwrap());

    let client = ClientBuilder::new()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;

    Ok(client)
}
