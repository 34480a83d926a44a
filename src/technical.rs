use crate::models::{Severity, TechnicalIssue};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static VIEWPORT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='viewport']").expect("viewport selector should be valid")
});
static CHARSET_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[charset]").expect("charset selector should be valid"));
static CONTENT_TYPE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[http-equiv='Content-Type']")
        .expect("content-type selector should be valid")
});
static HTML_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("html").expect("html selector should be valid"));
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("body selector should be valid"));
static STYLED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[style]").expect("style selector should be valid"));
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("img selector should be valid"));

const MAX_NESTING_DEPTH: usize = 15;
const MAX_INLINE_STYLES: usize = 10;

/// Fixed checklist of page-level technical SEO defects. Every check is
/// independent; every possible issue type is known in advance.
pub fn find_technical_issues(document: &Html) -> Vec<TechnicalIssue> {
    let mut issues = Vec::new();

    if document.select(&VIEWPORT_SELECTOR).next().is_none() {
        issues.push(TechnicalIssue {
            issue_type: "viewport".to_string(),
            severity: Severity::High,
            description: "No viewport meta tag found".to_string(),
            solution: "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> to the page head".to_string(),
        });
    }

    if document.select(&CHARSET_SELECTOR).next().is_none()
        && document.select(&CONTENT_TYPE_SELECTOR).next().is_none()
    {
        issues.push(TechnicalIssue {
            issue_type: "charset".to_string(),
            severity: Severity::Medium,
            description: "No character encoding declared".to_string(),
            solution: "Add <meta charset=\"utf-8\"> as the first element of the page head"
                .to_string(),
        });
    }

    let has_lang = document
        .select(&HTML_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("lang"))
        .is_some_and(|lang| !lang.is_empty());
    if !has_lang {
        issues.push(TechnicalIssue {
            issue_type: "language".to_string(),
            severity: Severity::Medium,
            description: "The <html> element has no lang attribute".to_string(),
            solution: "Declare the page language, e.g. <html lang=\"en\">".to_string(),
        });
    }

    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        let depth = max_element_depth(body);
        if depth > MAX_NESTING_DEPTH {
            issues.push(TechnicalIssue {
                issue_type: "dom_depth".to_string(),
                severity: Severity::Low,
                description: format!("DOM nesting is {} levels deep", depth),
                solution: "Flatten deeply nested markup to speed up rendering".to_string(),
            });
        }
    }

    let inline_styles = document.select(&STYLED_SELECTOR).count();
    if inline_styles > MAX_INLINE_STYLES {
        issues.push(TechnicalIssue {
            issue_type: "inline_styles".to_string(),
            severity: Severity::Low,
            description: format!("{} elements use inline styles", inline_styles),
            solution: "Move inline styles into a stylesheet".to_string(),
        });
    }

    let missing_alt = document
        .select(&IMG_SELECTOR)
        .filter(|img| img.value().attr("alt").is_none())
        .count();
    if missing_alt > 0 {
        issues.push(TechnicalIssue {
            issue_type: "image_alt".to_string(),
            severity: Severity::Medium,
            description: format!("{} images missing alt attributes", missing_alt),
            solution: "Add descriptive alt text to every image".to_string(),
        });
    }

    issues
}

/// Depth-first traversal counting element nesting below `element`.
fn max_element_depth(element: ElementRef<'_>) -> usize {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .map(|child| 1 + max_element_depth(child))
        .max()
        .unwrap_or(0)
}
