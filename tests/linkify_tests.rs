use rustc_hash::FxHashSet;
use urlize::{ConfigError, Options, urlize, urlize_with_options};

fn truncated_html(input: &str, max: usize) -> String {
    let options = Options {
        truncate_length: Some(max),
        ..Options::default()
    };
    urlize_with_options(input, &options).unwrap()
}

#[test]
fn full_url_with_query_and_trailing_period() {
    let input = "Check https://example.com/path?q=1 now.";
    let expected = "Check <a href=\"https://example.com/path?q=1\">https://example.com/path?q=1</a> now.";
    assert_eq!(urlize(input), expected);
}

#[test]
fn balanced_paren_inside_link_outer_stripped() {
    let input = "(see example.com/(x))";
    let expected = "(see <a href=\"http://example.com/(x)\">example.com/(x)</a>)";
    assert_eq!(urlize(input), expected);
}

#[test]
fn wiki_style_paren_path_kept_whole() {
    let input = "read example.com/foo_(bar) today";
    let expected = "read <a href=\"http://example.com/foo_(bar)\">example.com/foo_(bar)</a> today";
    assert_eq!(urlize(input), expected);
}

#[test]
fn email_with_trailing_period() {
    let input = "contact a@b.co.";
    let expected = "contact <a href=\"mailto:a@b.co\">a@b.co</a>.";
    assert_eq!(urlize(input), expected);
}

#[test]
fn truncated_display_keeps_full_href() {
    let html = truncated_html("example.com/very/long/path", 10);
    assert_eq!(
        html,
        "<a href=\"http://example.com/very/long/path\">examp\u{2026}path</a>"
    );
    // Displayed text is exactly 10 chars including the marker.
    let text = html.split('>').nth(1).unwrap().split('<').next().unwrap();
    assert_eq!(text.chars().count(), 10);
}

#[test]
fn truncation_skipped_when_text_fits() {
    let html = truncated_html("example.com", 50);
    assert_eq!(html, "<a href=\"http://example.com\">example.com</a>");
}

#[test]
fn multiple_links_per_line() {
    let input = "http://google.com https://google.com";
    let expected = "<a href=\"http://google.com\">http://google.com</a> <a href=\"https://google.com\">https://google.com</a>";
    assert_eq!(urlize(input), expected);
}

#[test]
fn quoted_url() {
    let input = "\"example.com\"";
    let expected = "&quot;<a href=\"http://example.com\">example.com</a>&quot;";
    assert_eq!(urlize(input), expected);
}

#[test]
fn ftp_scheme_recognized_by_default() {
    let input = "ftp://files.example.com/pub";
    let expected = "<a href=\"ftp://files.example.com/pub\">ftp://files.example.com/pub</a>";
    assert_eq!(urlize(input), expected);
}

#[test]
fn unknown_scheme_left_as_text() {
    assert_eq!(urlize("gopher://example.com"), "gopher://example.com");
}

#[test]
fn custom_scheme_set_replaces_default() {
    let options = Options {
        allowed_schemes: Some(
            ["ssh".to_owned()].into_iter().collect::<FxHashSet<String>>(),
        ),
        ..Options::default()
    };
    let html = urlize_with_options("ssh://host.example.com https://example.com", &options).unwrap();
    assert!(html.contains("<a href=\"ssh://host.example.com\">"));
    assert!(!html.contains("<a href=\"https://example.com\">"));
}

#[test]
fn no_links_at_all() {
    let input = "These should not link:\n\n@a.b.c@. x n@. b";
    let result = urlize(input);
    assert!(
        !result.contains("<a"),
        "Expected no links in output, got: {result}"
    );
}

#[test]
fn html_in_input_is_neutralized() {
    let input = "<script>alert('x')</script> example.com";
    let result = urlize(input);
    assert!(!result.contains("<script>"));
    assert!(result.contains("&lt;script&gt;"));
    assert!(result.contains("<a href=\"http://example.com\">"));
}

#[test]
fn newlines_and_tabs_preserved() {
    let input = "one\n\ttwo  example.com\nthree";
    let result = urlize(input);
    assert!(result.starts_with("one\n\ttwo  "));
    assert!(result.ends_with("\nthree"));
}

#[test]
fn zero_truncate_length_rejected() {
    let options = Options {
        truncate_length: Some(0),
        ..Options::default()
    };
    assert_eq!(
        urlize_with_options("example.com", &options),
        Err(ConfigError::TruncateLengthZero)
    );
}

#[test]
fn empty_scheme_set_rejected() {
    let options = Options {
        allowed_schemes: Some(FxHashSet::default()),
        ..Options::default()
    };
    assert_eq!(
        urlize_with_options("example.com", &options),
        Err(ConfigError::EmptySchemeSet)
    );
}

#[test]
fn adversarial_long_punctuation_token_terminates() {
    let token = ".".repeat(10_000);
    let result = urlize(&token);
    assert_eq!(result, token);
}

#[test]
fn unbalanced_delimiters_degrade_gracefully() {
    let input = "(((example.com";
    let expected = "(((<a href=\"http://example.com\">example.com</a>";
    assert_eq!(urlize(input), expected);
}
