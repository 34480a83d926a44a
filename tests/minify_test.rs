use b3acon::minify::{CodeKind, minify_code};

#[test]
fn test_js_minification_reports_savings() {
    let code = "function add(a, b) {\n    // add two numbers\n    return a + b;\n}\n";
    let result = minify_code(code, CodeKind::Js);

    assert!(result.minified.len() < code.len());
    assert!(result.savings_percent > 0.0);
    assert!(result.minified.contains("function add"));
}

#[test]
fn test_empty_input_yields_zero_savings() {
    let result = minify_code("", CodeKind::Js);
    assert_eq!(result.minified, "");
    assert_eq!(result.savings_percent, 0.0);
}

#[test]
fn test_css_comments_stripped() {
    let css = "/* header styles */\nh1 { color: red; }\n";
    let result = minify_code(css, CodeKind::Css);

    assert!(!result.minified.contains("header styles"));
    assert!(result.minified.contains("h1{color:red}"));
}

#[test]
fn test_css_whitespace_collapsed_and_semicolon_dropped_before_brace() {
    let css = "a   {\n  text-decoration :  none ;\n}\n\nb { font-weight: bold; }";
    let result = minify_code(css, CodeKind::Css);

    assert_eq!(
        result.minified,
        "a{text-decoration:none}b{font-weight:bold}"
    );
    assert!(result.savings_percent > 0.0);
}

#[test]
fn test_savings_never_negative() {
    let already_tight = "a{color:red}";
    let result = minify_code(already_tight, CodeKind::Css);
    assert!(result.savings_percent >= 0.0);
}
