use crate::models::{
    HeadingRecord, ImageRecord, LinkAnalysis, ScoreBreakdown, Severity, TechnicalIssue,
};

/// Maximum number of suggestions surfaced to the caller.
const MAX_SUGGESTIONS: usize = 10;

/// Combines the individual analyses into a single 0-100 score via additive
/// penalties, emitting suggestions in a fixed evaluation order: title,
/// description, headings, images, links, technical issues. The order is
/// load-bearing for deterministic output.
pub fn calculate_seo_score(
    title: Option<&str>,
    description: Option<&str>,
    headings: &[HeadingRecord],
    images: &[ImageRecord],
    links: &LinkAnalysis,
    technical_issues: &[TechnicalIssue],
) -> ScoreBreakdown {
    let mut score: i32 = 100;
    let mut suggestions: Vec<String> = Vec::new();

    match title {
        None => {
            score -= 20;
            suggestions.push("Add a page title".to_string());
        }
        Some(t) if t.chars().count() > 60 => {
            score -= 10;
            suggestions.push("Shorten title to under 60 characters".to_string());
        }
        Some(t) if t.chars().count() < 30 => {
            score -= 5;
            suggestions.push("Expand title to 30-60 characters".to_string());
        }
        Some(_) => {}
    }

    match description {
        None => {
            score -= 15;
            suggestions.push("Add a meta description".to_string());
        }
        Some(d) if d.chars().count() > 160 => score -= 8,
        Some(d) if d.chars().count() < 120 => score -= 5,
        Some(_) => {}
    }

    let h1_count = headings.iter().filter(|h| h.level == 1).count();
    if h1_count == 0 {
        score -= 15;
        suggestions.push("Add an H1 heading to the page".to_string());
    } else if h1_count > 1 {
        score -= 10;
        suggestions.push("Use a single H1 heading".to_string());
    }

    let heading_issues = headings.iter().filter(|h| !h.issues.is_empty()).count();
    if heading_issues > 0 {
        score -= (heading_issues as i32 * 2).min(10);
        suggestions.push("Fix heading structure issues".to_string());
    }

    let image_issues = images.iter().filter(|i| !i.issues.is_empty()).count();
    if image_issues > 0 {
        score -= (image_issues as i32 * 2).min(15);
        suggestions
            .push("Optimize images (add alt text, compress, use modern formats)".to_string());
    }

    if links.internal.len() < 3 {
        score -= 8;
        suggestions.push("Add more internal links (3-5 recommended)".to_string());
    }

    let weak_links = links.internal.iter().filter(|l| l.score < 70).count();
    if weak_links > 0 {
        score -= (weak_links as i32 * 2).min(10);
        suggestions.push("Improve anchor text on internal links".to_string());
    }

    for issue in technical_issues {
        score -= match issue.severity {
            Severity::High => 15,
            Severity::Medium => 10,
            Severity::Low => 5,
        };
        suggestions.push(format!("Fix: {}", issue.description));
    }

    suggestions.truncate(MAX_SUGGESTIONS);

    ScoreBreakdown {
        score: score.clamp(0, 100) as u32,
        suggestions,
    }
}
