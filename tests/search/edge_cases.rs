//! Degenerate inputs: every one of them is an empty result, never a panic.

use super::common::{tier_fixture, SITES};
use wex::{rank, search, Record};

#[test]
fn test_empty_query() {
    assert!(search("", SITES).is_empty());
    assert!(search("", &tier_fixture()).is_empty());
}

#[test]
fn test_whitespace_query() {
    assert!(search("   ", SITES).is_empty());
    assert!(search("\t\n", &tier_fixture()).is_empty());
}

#[test]
fn test_empty_records() {
    let empty: Vec<Record> = Vec::new();
    assert!(search("foo", &empty).is_empty());
    assert!(rank("foo", &empty).is_empty());
}

#[test]
fn test_empty_text() {
    assert!(search("foo", "").is_empty());
    assert!(search("foo", "\n\n\n").is_empty());
}

#[test]
fn test_text_without_parseable_lines() {
    assert!(search("foo", "foo\nfoo bar\n{foo}").is_empty());
}

#[test]
fn test_no_match() {
    assert!(search("haskell", SITES).is_empty());
}

#[test]
fn test_query_is_trimmed() {
    assert_eq!(search("  python  ", SITES), search("python", SITES));
}

#[test]
fn test_byte_order_marks_are_trimmed() {
    let text = format!("\u{FEFF}{}", SITES);
    let results = search("\u{FEFF}rust", text.as_str());
    assert_eq!(results[0].url, "https://rust-lang.org");
    assert_eq!(results, search("rust", SITES));
}

#[test]
fn test_query_with_inner_space() {
    let results = search("memory safety", SITES);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "https://rust-lang.org");
}

#[test]
fn test_regex_metacharacters_are_literal() {
    assert!(search(".*", SITES).is_empty());
    assert!(search("(", SITES).is_empty());
}

#[test]
fn test_malformed_json_fields_still_match_by_url() {
    let records: Vec<Record> = serde_json::from_str(
        r#"[
            {"url":"http://foo.com","name":5,"description":{"x":1}},
            {"url":"http://bar.com","name":["Foo Bar"],"description":["d"]}
        ]"#,
    )
    .unwrap();

    let results = search("foo", &records);
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["http://bar.com", "http://foo.com"]);
}
