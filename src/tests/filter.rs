use super::{filter, HeadingFilter};

#[test]
fn test_literal_filter_ignores_case() {
    assert!(filter("intro", "Introduction", false));
    assert!(filter("DUCT", "Introduction", false));
    assert!(!filter("usage", "Introduction", false));
}

#[test]
fn test_literal_filter_does_not_interpret_regex() {
    assert!(filter("a.b", "see a.b", false));
    assert!(!filter("a.b", "axb", false));
}

#[test]
fn test_regex_filter() {
    assert!(filter("^Chapter \\d+$", "Chapter 12", true));
    assert!(!filter("^Chapter \\d+$", "Chapter twelve", true));
}

#[test]
fn test_invalid_regex_matches_everything() {
    let compiled = HeadingFilter::new("(unclosed", true);
    assert!(matches!(compiled, HeadingFilter::All));
    assert!(compiled.matches("anything"));
}

#[test]
fn test_empty_pattern_matches_everything() {
    assert!(filter("", "Whatever", false));
    assert!(filter("", "Whatever", true));
}
