use crate::models::MinifyResult;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Js,
    Css,
}

static CSS_COMMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment regex should be valid"));
static CSS_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should be valid"));
static CSS_BEFORE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r";\s*\}").expect("brace regex should be valid"));
static CSS_PUNCT_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([{};:,])\s*").expect("punctuation regex should be valid"));

/// Best-effort minification with a size-savings percentage. Never fails:
/// a JS input the minifier cannot handle comes back unchanged at 0%.
pub fn minify_code(code: &str, kind: CodeKind) -> MinifyResult {
    let minified = match kind {
        CodeKind::Js => minify_js(code),
        CodeKind::Css => minify_css(code),
    };

    let savings_percent = if code.is_empty() {
        0.0
    } else {
        let saved = code.len().saturating_sub(minified.len());
        (saved as f64 / code.len() as f64 * 1000.0).round() / 10.0
    };

    MinifyResult {
        minified,
        savings_percent,
    }
}

fn minify_js(code: &str) -> String {
    let minified = minifier::js::minify(code).to_string();
    // Fail soft: an empty result for non-empty input means the minifier
    // choked, so hand the original back untouched.
    if minified.is_empty() && !code.is_empty() {
        code.to_string()
    } else {
        minified
    }
}

/// Naive regex pipeline, no true parsing. Patterns inside string literals
/// may be mis-minified; known limitation, kept as-is.
fn minify_css(code: &str) -> String {
    let stripped = CSS_COMMENTS.replace_all(code, "");
    let collapsed = CSS_WHITESPACE.replace_all(&stripped, " ");
    let trimmed = CSS_BEFORE_BRACE.replace_all(&collapsed, "}");
    let tightened = CSS_PUNCT_SPACING.replace_all(&trimmed, "$1");
    tightened.trim().to_string()
}
