use crate::models::ImageRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("img selector should be valid"));

/// Size estimate threshold in KB before a "Large file size" flag is raised.
const LARGE_SIZE_KB: u32 = 500;

/// Walks `<img>` elements, resolving sources against `base_url` and flagging
/// accessibility and performance defects.
pub fn analyze_images(document: &Html, base_url: &Url) -> Vec<ImageRecord> {
    let mut records = Vec::new();

    for element in document.select(&IMG_SELECTOR) {
        let Some(src) = element.value().attr("src") else {
            continue;
        };

        let resolved = resolve_src(src, base_url);
        let alt = element.value().attr("alt").map(|s| s.to_string());
        let width = element
            .value()
            .attr("width")
            .and_then(|w| w.parse::<u32>().ok());
        let height = element
            .value()
            .attr("height")
            .and_then(|h| h.parse::<u32>().ok());

        let lower = resolved.to_lowercase();
        let optimized = lower.contains(".webp") || lower.contains(".avif");
        let format = detect_format(&lower);

        let mut issues = Vec::new();
        match &alt {
            None => issues.push("Missing alt attribute".to_string()),
            Some(text) => {
                if text.chars().count() < 5 {
                    issues.push("Alt text too short".to_string());
                } else if text.chars().count() > 125 {
                    issues.push("Alt text too long".to_string());
                }
            }
        }

        if (lower.contains(".jpg") || lower.contains(".png")) && !optimized {
            issues.push("Consider using WebP or AVIF format".to_string());
        }

        // Crude uncompressed-bitmap approximation, only when both
        // dimensions are declared. Not a real file-size measurement.
        let size_kb = match (width, height) {
            (Some(w), Some(h)) => {
                Some(((w as f64 * h as f64 * 3.0) / 1024.0).round() as u32)
            }
            _ => None,
        };
        if size_kb.is_some_and(|kb| kb > LARGE_SIZE_KB) {
            issues.push("Large file size".to_string());
        }

        records.push(ImageRecord {
            src: resolved,
            alt,
            width,
            height,
            size_kb,
            format,
            optimized,
            issues,
        });
    }

    records
}

fn resolve_src(src: &str, base_url: &Url) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_string();
    }
    // Url::join handles both root-relative ("/x" against the origin) and
    // path-relative sources.
    base_url
        .join(src)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| src.to_string())
}

fn detect_format(lower_src: &str) -> Option<String> {
    for ext in ["webp", "avif", "jpg", "jpeg", "png", "gif", "svg"] {
        if lower_src.contains(&format!(".{}", ext)) {
            return Some(ext.to_string());
        }
    }
    None
}
