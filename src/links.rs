use crate::models::{ExternalLink, InternalLink, LinkAnalysis};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("a[href] selector should be valid"));

/// Walks anchor elements, classifies each as internal or external relative
/// to the analyzed host, and scores internal anchor-text quality. `broken`
/// is always empty here; it is populated by the link checker.
pub fn analyze_links(document: &Html, base_url: &Url) -> LinkAnalysis {
    let mut analysis = LinkAnalysis::default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if should_skip(href) {
            continue;
        }

        let anchor = element.text().collect::<String>().trim().to_string();

        if href.starts_with("http") {
            let same_host = Url::parse(href)
                .ok()
                .is_some_and(|u| u.host_str() == base_url.host_str());
            if same_host {
                analysis.internal.push(InternalLink {
                    url: href.to_string(),
                    anchor: anchor.clone(),
                    score: score_anchor(&anchor, href),
                });
            } else {
                analysis.external.push(ExternalLink {
                    url: href.to_string(),
                    anchor,
                    status: None,
                });
            }
        } else {
            // Root-relative and path-relative hrefs (and the literal "#"
            // placeholder) resolve against the page and count as internal.
            let resolved = base_url
                .join(href)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| href.to_string());
            analysis.internal.push(InternalLink {
                url: resolved,
                anchor: anchor.clone(),
                score: score_anchor(&anchor, href),
            });
        }
    }

    analysis
}

/// Same-page fragments and non-HTTP schemes are not links worth analyzing.
/// The bare "#" placeholder is kept so it can be penalized.
fn should_skip(href: &str) -> bool {
    (href.starts_with('#') && href != "#")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
}

/// Anchor-text quality starting at 100, floored at 0.
fn score_anchor(anchor: &str, href: &str) -> u32 {
    let mut score: i32 = 100;

    if anchor.is_empty() {
        score -= 40;
    }
    if anchor.chars().count() < 3 {
        score -= 20;
    }
    let lower = anchor.to_lowercase();
    if lower.contains("click here") || lower.contains("read more") {
        score -= 15;
    }
    if href == "#" {
        score -= 50;
    }

    score.max(0) as u32
}

/// Resolved URLs eligible for the broken-link checker, in document order.
/// Skips every fragment href (including bare "#"), mailto: and tel:.
pub fn collect_checkable_urls(document: &Html, base_url: &Url) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| {
            !href.starts_with('#') && !href.starts_with("mailto:") && !href.starts_with("tel:")
        })
        .filter_map(|href| base_url.join(href).ok())
        .map(|u| u.to_string())
        .collect()
}
