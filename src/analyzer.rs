use crate::fetcher::{Fetcher, normalize_url};
use crate::headings::analyze_headings;
use crate::images::analyze_images;
use crate::links::analyze_links;
use crate::models::SeoReport;
use crate::scoring::calculate_seo_score;
use crate::technical::find_technical_issues;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("meta description selector should be valid")
});
static META_KEYWORDS_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='keywords']").expect("meta keywords selector should be valid")
});

/// Fetches `url_or_domain` and runs the full analysis over the result.
/// The fetch is the only step allowed to fail; everything downstream of a
/// successful fetch always produces a report.
pub async fn analyze_url(fetcher: &Fetcher, url_or_domain: &str) -> Result<SeoReport> {
    let url = normalize_url(url_or_domain);
    let html = fetcher.fetch_html(&url).await?;
    tracing::info!(url = %url, bytes = html.len(), "Fetched page, analyzing");
    analyze_html(&html, &url)
}

/// Pure analysis over already-fetched HTML. Parsing is lenient; malformed
/// markup yields a best-effort tree, never an error.
pub fn analyze_html(html: &str, url: &str) -> Result<SeoReport> {
    let base_url = Url::parse(url).with_context(|| format!("Invalid URL: {}", url))?;
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let description = extract_meta_content(&document, &META_DESC_SELECTOR);
    let keywords = extract_meta_content(&document, &META_KEYWORDS_SELECTOR);

    let headings = analyze_headings(&document);
    let images = analyze_images(&document, &base_url);
    let links = analyze_links(&document, &base_url);
    let technical_issues = find_technical_issues(&document);

    let breakdown = calculate_seo_score(
        title.as_deref(),
        description.as_deref(),
        &headings,
        &images,
        &links,
        &technical_issues,
    );

    Ok(SeoReport {
        url: url.to_string(),
        title,
        description,
        keywords,
        headings,
        images,
        links,
        technical_issues,
        score: breakdown.score,
        suggestions: breakdown.suggestions,
        analyzed_at: chrono::Utc::now().to_rfc3339(),
    })
}

fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

fn extract_meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
