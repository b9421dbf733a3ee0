//! Tier scoring tests.
//!
//! Each record earns the score of the first tier it matches in, checked
//! name → description → url. Scores never add up across tiers.

use super::common::{make_record, tier_fixture, titles};
use wex::{rank, score_record, search, MatchTier, DESCRIPTION_SCORE, NAME_SCORE, URL_SCORE};

#[test]
fn test_each_tier_gets_its_score() {
    let records = tier_fixture();
    let ranked = rank("foo", &records);

    let scores: Vec<(&str, u32, MatchTier)> = ranked
        .iter()
        .map(|m| (m.record.title(), m.score, m.tier))
        .collect();
    assert_eq!(
        scores,
        vec![
            ("R1 foo", NAME_SCORE, MatchTier::Name),
            ("R2", DESCRIPTION_SCORE, MatchTier::Description),
            ("R3", URL_SCORE, MatchTier::Url),
        ]
    );
}

#[test]
fn test_reranks_regardless_of_input_order() {
    let records = tier_fixture();
    assert_eq!(titles(&search("foo", &records)), vec!["R1 foo", "R2", "R3"]);

    let reversed: Vec<_> = records.iter().rev().cloned().collect();
    assert_eq!(titles(&search("foo", &reversed)), vec!["R1 foo", "R2", "R3"]);
}

#[test]
fn test_name_and_description_match_scores_name_only() {
    let record = make_record("http://foo.example", &["foo"], &["foo", "more foo"]);
    assert_eq!(score_record(&record, "foo"), NAME_SCORE);
}

#[test]
fn test_description_and_url_match_scores_description_only() {
    let record = make_record("http://foo.example", &["bar"], &["foo"]);
    assert_eq!(score_record(&record, "foo"), DESCRIPTION_SCORE);
}

#[test]
fn test_placeholder_text_is_searchable() {
    // Placeholders are real name/description entries once parsed.
    let records = wex::parse_dataset("{url=u,name={},description={d}}");
    let results = search(wex::NO_NAME_PLACEHOLDER, &records);
    assert_eq!(results.len(), 1);
}

#[test]
fn test_case_insensitive_in_every_tier() {
    let name = make_record("", &["FooBar"], &["x"]);
    let description = make_record("", &["x"], &["BIG FOO"]);
    let url = make_record("HTTP://FOO.EXAMPLE", &["x"], &["y"]);

    for query in ["foo", "FOO", "fOo"] {
        assert_eq!(rank(query, std::slice::from_ref(&name))[0].tier, MatchTier::Name);
        assert_eq!(
            rank(query, std::slice::from_ref(&description))[0].tier,
            MatchTier::Description
        );
        assert_eq!(rank(query, std::slice::from_ref(&url))[0].tier, MatchTier::Url);
    }
}
