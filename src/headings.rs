use crate::models::HeadingRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6").expect("heading selector should be valid")
});

/// Walks heading elements in document order and flags structural defects.
///
/// The skipped-level check compares each heading only to its immediate
/// predecessor in document order, not the nearest shallower ancestor.
/// Known heuristic limitation, kept for output compatibility.
pub fn analyze_headings(document: &Html) -> Vec<HeadingRecord> {
    let mut records: Vec<HeadingRecord> = Vec::new();
    let mut seen_h1 = false;

    for element in document.select(&HEADING_SELECTOR) {
        let tag = element.value().name().to_string();
        let level: u8 = tag[1..].parse().unwrap_or(6);
        let text = element.text().collect::<String>().trim().to_string();

        let mut issues = Vec::new();
        if text.is_empty() {
            issues.push("Empty heading".to_string());
        } else if text.chars().count() > 60 {
            issues.push("Heading too long".to_string());
        } else if text.chars().count() < 10 {
            issues.push("Heading very short".to_string());
        }

        if level == 1 {
            if seen_h1 {
                issues.push("Multiple H1 tags found".to_string());
            }
            seen_h1 = true;
        }

        records.push(HeadingRecord {
            tag,
            text,
            level,
            issues,
        });
    }

    // Second pass: hierarchy defects against the immediately preceding heading
    for i in 1..records.len() {
        if records[i].level > records[i - 1].level + 1 {
            let message = format!(
                "Skipped heading level ({} followed by {})",
                records[i - 1].tag,
                records[i].tag
            );
            records[i].issues.push(message);
        }
    }

    records
}
