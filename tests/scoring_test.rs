use b3acon::analyzer::analyze_html;
use b3acon::models::LinkAnalysis;
use b3acon::scoring::calculate_seo_score;

const BASE_URL: &str = "https://example.com/page";

/// Page exercising the documented additive-penalty arithmetic:
/// 100 - 10 (long title) - 15 (no description) - 6 (three image issues)
/// - 15 (missing viewport, high) = 54.
fn golden_page() -> String {
    let title = "t".repeat(80);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{}</title>
</head>
<body>
  <h1>The main page heading</h1>
  <img src="/one.webp" alt="img"><img src="/two.webp" alt="img"><img src="/three.webp" alt="img">
  <p><a href="/about">About the company</a></p>
  <p><a href="/contact">Contact the team</a></p>
  <p><a href="/pricing">Pricing and plans</a></p>
</body>
</html>"#,
        title
    )
}

#[test]
fn test_golden_scenario_score_and_suggestion_order() {
    let report = analyze_html(&golden_page(), BASE_URL).unwrap();

    assert_eq!(report.score, 54);
    assert_eq!(
        &report.suggestions[..4],
        &[
            "Shorten title to under 60 characters".to_string(),
            "Add a meta description".to_string(),
            "Optimize images (add alt text, compress, use modern formats)".to_string(),
            "Fix: No viewport meta tag found".to_string(),
        ]
    );
}

#[test]
fn test_analysis_is_pure_over_fetched_html() {
    let html = golden_page();
    let first = analyze_html(&html, BASE_URL).unwrap();
    let second = analyze_html(&html, BASE_URL).unwrap();

    // Identical in everything but the capture timestamp
    assert_eq!(first.score, second.score);
    assert_eq!(first.suggestions, second.suggestions);
    assert_eq!(first.headings, second.headings);
    assert_eq!(first.images, second.images);
    assert_eq!(first.links, second.links);
    assert_eq!(first.technical_issues, second.technical_issues);
}

#[test]
fn test_score_stays_in_bounds_for_disastrous_page() {
    // Everything wrong at once: no title, no description, no viewport, no
    // charset, no lang, duplicate empty H1s, unoptimized alt-less images,
    // placeholder links.
    let html = r##"<html><head></head><body>
        <h1></h1><h1></h1><h5>x</h5>
        <img src="/a.jpg"><img src="/b.jpg"><img src="/c.png"><img src="/d.png">
        <a href="#"></a><a href="#"></a>
        </body></html>"##;
    let report = analyze_html(html, BASE_URL).unwrap();

    assert_eq!(report.score, 0);
    assert!(report.suggestions.len() <= 10);
}

#[test]
fn test_suggestion_cap_at_ten() {
    let html = r##"<html><head></head><body>
        <h1></h1><h1></h1>
        <img src="/a.jpg">
        <a href="#"></a>
        </body></html>"##;
    let report = analyze_html(html, BASE_URL).unwrap();

    // title, description, multiple-h1, heading issues, images, internal
    // links, weak anchors, plus four technical fixes: capped at 10
    assert_eq!(report.suggestions.len(), 10);
}

#[test]
fn test_missing_h1_penalty_is_exactly_fifteen() {
    let without_h1 = r#"<html lang="en"><head>
        <meta charset="utf-8"><meta name="viewport" content="width=device-width">
        <title>A perfectly adequate page title here</title>
        <meta name="description" content="A description comfortably long enough to clear the lower length bound applied to meta descriptions by the checks.">
        </head><body>
        <p><a href="/one">First internal link</a><a href="/two">Second internal link</a><a href="/three">Third internal link</a></p>
        </body></html>"#;
    let with_h1 = without_h1.replace(
        "<body>",
        "<body><h1>The single main heading</h1>",
    );

    let bare = analyze_html(without_h1, BASE_URL).unwrap();
    let headed = analyze_html(&with_h1, BASE_URL).unwrap();

    assert_eq!(headed.score - bare.score, 15);
    assert!(bare.score <= 85);
}

#[test]
fn test_multiple_h1_penalty() {
    let breakdown = calculate_seo_score(
        Some("A perfectly adequate page title here"),
        Some(&"d".repeat(140)),
        &[
            b3acon::models::HeadingRecord {
                tag: "h1".to_string(),
                text: "First main heading".to_string(),
                level: 1,
                issues: vec![],
            },
            b3acon::models::HeadingRecord {
                tag: "h1".to_string(),
                text: "Second main heading".to_string(),
                level: 1,
                issues: vec!["Multiple H1 tags found".to_string()],
            },
        ],
        &[],
        &LinkAnalysis {
            internal: vec![
                good_link("https://example.com/a"),
                good_link("https://example.com/b"),
                good_link("https://example.com/c"),
            ],
            ..Default::default()
        },
        &[],
    );

    // -10 for the duplicate H1, -2 for one heading carrying an issue
    assert_eq!(breakdown.score, 88);
    assert!(
        breakdown
            .suggestions
            .contains(&"Use a single H1 heading".to_string())
    );
}

#[test]
fn test_few_internal_links_penalized() {
    let breakdown = calculate_seo_score(
        Some("A perfectly adequate page title here"),
        Some(&"d".repeat(140)),
        &[b3acon::models::HeadingRecord {
            tag: "h1".to_string(),
            text: "The single main heading".to_string(),
            level: 1,
            issues: vec![],
        }],
        &[],
        &LinkAnalysis::default(),
        &[],
    );

    assert_eq!(breakdown.score, 92);
    assert!(
        breakdown
            .suggestions
            .contains(&"Add more internal links (3-5 recommended)".to_string())
    );
}

fn good_link(url: &str) -> b3acon::models::InternalLink {
    b3acon::models::InternalLink {
        url: url.to_string(),
        anchor: "Descriptive anchor text".to_string(),
        score: 100,
    }
}
