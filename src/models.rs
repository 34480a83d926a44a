use serde::{Deserialize, Serialize};

/// One `<h1>`-`<h6>` element in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub tag: String,
    pub text: String,
    /// Numeric level parsed from the tag name (1-6).
    pub level: u8,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Resolved absolute URL.
    pub src: String,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Estimated size in KB, only when both dimensions are known.
    pub size_kb: Option<u32>,
    pub format: Option<String>,
    pub optimized: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalLink {
    pub url: String,
    pub anchor: String,
    /// Anchor-text quality, 0-100.
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub url: String,
    pub anchor: String,
    pub status: Option<u16>,
}

/// Partitioned links of one page. `broken` stays empty until the
/// link checker has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkAnalysis {
    pub internal: Vec<InternalLink>,
    pub external: Vec<ExternalLink>,
    pub broken: Vec<LinkCheckResult>,
}

/// Outcome of checking a single link. A failed request is captured as
/// `status: 0` plus an error message; it never aborts the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkCheckResult {
    pub url: String,
    pub status: u16,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIssue {
    pub issue_type: String,
    pub severity: Severity,
    pub description: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0-100.
    pub score: u32,
    /// Ranked, capped at 10 entries.
    pub suggestions: Vec<String>,
}

/// The aggregate result of one analysis pass. Constructed fresh on every
/// invocation and serializable so callers can cache it externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub headings: Vec<HeadingRecord>,
    pub images: Vec<ImageRecord>,
    pub links: LinkAnalysis,
    pub technical_issues: Vec<TechnicalIssue>,
    pub score: u32,
    pub suggestions: Vec<String>,
    pub analyzed_at: String,
}

/// Core Web Vitals for a single device strategy. Times are in seconds,
/// `cls` is unitless, `score` is 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    pub score: u32,
    pub fcp: f64,
    pub lcp: f64,
    pub cls: f64,
    pub tti: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub title: String,
    pub description: String,
    /// Estimated savings in milliseconds.
    pub savings_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpeedReport {
    pub desktop: DeviceMetrics,
    pub mobile: DeviceMetrics,
    pub opportunities: Vec<Opportunity>,
    /// False when the report was simulated because no API key is configured.
    pub from_api: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexNowOutcome {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinifyResult {
    pub minified: String,
    pub savings_percent: f64,
}
