use crate::models::{DeviceMetrics, Opportunity, PageSpeedReport};
use anyhow::{Context, Result};
use rand::Rng;
use reqwest::Client;
use serde_json::Value;

const PAGESPEED_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Opportunity audits below this estimated savings are not worth surfacing.
const MIN_SAVINGS_MS: f64 = 100.0;
const MAX_OPPORTUNITIES: usize = 5;

/// Google PageSpeed Insights adapter. Without an API key it degrades to a
/// randomized but realistically-shaped simulated report instead of failing,
/// so callers always have something to render.
pub struct PageSpeedClient {
    client: Client,
    api_key: Option<String>,
}

impl PageSpeedClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    pub async fn analyze(&self, url: &str) -> Result<PageSpeedReport> {
        match &self.api_key {
            Some(key) => self.analyze_real(url, key).await,
            None => {
                tracing::info!("No PageSpeed API key configured, using simulated metrics");
                Ok(simulated_report())
            }
        }
    }

    async fn analyze_real(&self, url: &str, key: &str) -> Result<PageSpeedReport> {
        let (desktop_json, mobile_json) = tokio::try_join!(
            self.run_strategy(url, key, "desktop"),
            self.run_strategy(url, key, "mobile"),
        )?;

        let desktop = extract_metrics(&desktop_json)
            .context("PageSpeed desktop response missing expected audits")?;
        let mobile = extract_metrics(&mobile_json)
            .context("PageSpeed mobile response missing expected audits")?;
        let opportunities = extract_opportunities(&mobile_json);

        Ok(PageSpeedReport {
            desktop,
            mobile,
            opportunities,
            from_api: true,
        })
    }

    async fn run_strategy(&self, url: &str, key: &str, strategy: &str) -> Result<Value> {
        let response = self
            .client
            .get(PAGESPEED_ENDPOINT)
            .query(&[("url", url), ("key", key), ("strategy", strategy)])
            .send()
            .await
            .with_context(|| format!("PageSpeed {} request failed", strategy))?
            .error_for_status()
            .with_context(|| format!("PageSpeed {} request rejected", strategy))?;

        response
            .json::<Value>()
            .await
            .with_context(|| format!("PageSpeed {} response was not JSON", strategy))
    }
}

fn extract_metrics(json: &Value) -> Option<DeviceMetrics> {
    let lighthouse = json.get("lighthouseResult")?;
    let score = lighthouse
        .pointer("/categories/performance/score")?
        .as_f64()?;
    let audits = lighthouse.get("audits")?;

    let seconds = |audit: &str| -> Option<f64> {
        Some(audits.pointer(&format!("/{}/numericValue", audit))?.as_f64()? / 1000.0)
    };

    Some(DeviceMetrics {
        score: (score * 100.0).round() as u32,
        fcp: seconds("first-contentful-paint")?,
        lcp: seconds("largest-contentful-paint")?,
        cls: audits
            .pointer("/cumulative-layout-shift/numericValue")?
            .as_f64()?,
        tti: seconds("interactive")?,
    })
}

fn extract_opportunities(json: &Value) -> Vec<Opportunity> {
    let Some(audits) = json
        .pointer("/lighthouseResult/audits")
        .and_then(|a| a.as_object())
    else {
        return Vec::new();
    };

    let mut opportunities: Vec<Opportunity> = audits
        .values()
        .filter(|audit| {
            audit.pointer("/details/type").and_then(|t| t.as_str()) == Some("opportunity")
        })
        .filter_map(|audit| {
            let savings_ms = audit
                .pointer("/details/overallSavingsMs")
                .and_then(|s| s.as_f64())?;
            if savings_ms <= MIN_SAVINGS_MS {
                return None;
            }
            Some(Opportunity {
                title: audit.get("title")?.as_str()?.to_string(),
                description: audit
                    .get("description")
                    .and_then(|d| d.as_str())
                    .unwrap_or_default()
                    .to_string(),
                savings_ms,
            })
        })
        .collect();

    opportunities.sort_by(|a, b| b.savings_ms.total_cmp(&a.savings_ms));
    opportunities.truncate(MAX_OPPORTUNITIES);
    opportunities
}

/// Deterministic-shape fallback: desktop scores 70-95, mobile strictly
/// lower by 10-20 points, vitals randomized within realistic bounds.
pub fn simulated_report() -> PageSpeedReport {
    let mut rng = rand::thread_rng();

    let desktop_score: u32 = rng.gen_range(70..=95);
    let mobile_score = desktop_score - rng.gen_range(10..=20);

    let desktop = DeviceMetrics {
        score: desktop_score,
        fcp: rng.gen_range(0.8..1.8),
        lcp: rng.gen_range(1.5..3.0),
        cls: rng.gen_range(0.01..0.15),
        tti: rng.gen_range(2.0..4.5),
    };
    let mobile = DeviceMetrics {
        score: mobile_score,
        fcp: rng.gen_range(1.5..3.0),
        lcp: rng.gen_range(2.5..4.5),
        cls: rng.gen_range(0.05..0.25),
        tti: rng.gen_range(3.5..7.0),
    };

    PageSpeedReport {
        desktop,
        mobile,
        opportunities: vec![
            Opportunity {
                title: "Eliminate render-blocking resources".to_string(),
                description: "Defer non-critical CSS and JavaScript".to_string(),
                savings_ms: rng.gen_range(200.0..900.0),
            },
            Opportunity {
                title: "Properly size images".to_string(),
                description: "Serve images scaled to their display size".to_string(),
                savings_ms: rng.gen_range(150.0..600.0),
            },
        ],
        from_api: false,
    }
}
