//! Ranking invariants.
//!
//! - scores in a ranking are non-increasing
//! - only matching records appear, each scored by its best tier
//! - equal scores keep input order
//! - search is case-insensitive and total

use super::common::make_record;
use proptest::prelude::*;
use wex::{rank, score_record, search, MatchTier, Record};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{1,4}").unwrap()
}

/// Records over a tiny alphabet so queries hit often.
fn record_strategy() -> impl Strategy<Value = Record> {
    (
        word_strategy(),
        prop::collection::vec(word_strategy(), 1..3),
        prop::collection::vec(word_strategy(), 1..3),
    )
        .prop_map(|(url, names, descriptions)| {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let descriptions: Vec<&str> = descriptions.iter().map(String::as_str).collect();
            make_record(&url, &names, &descriptions)
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..10)
}

/// Oracle: the tier a record should land in, computed independently.
fn oracle_tier(record: &Record, query: &str) -> Option<MatchTier> {
    let q = query.trim().to_lowercase();
    let hit = |s: &String| s.to_lowercase().contains(&q);
    if record.name.iter().any(hit) {
        Some(MatchTier::Name)
    } else if record.description.iter().any(hit) {
        Some(MatchTier::Description)
    } else if hit(&record.url) {
        Some(MatchTier::Url)
    } else {
        None
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: scores never increase down the ranking.
    #[test]
    fn prop_scores_non_increasing(records in records_strategy(), query in word_strategy()) {
        let ranked = rank(&query, &records);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: results are exactly the records the oracle says match.
    #[test]
    fn prop_matches_agree_with_oracle(records in records_strategy(), query in word_strategy()) {
        let ranked = rank(&query, &records);
        let expected = records.iter().filter(|r| oracle_tier(r, &query).is_some()).count();
        prop_assert_eq!(ranked.len(), expected);

        for hit in &ranked {
            prop_assert_eq!(Some(hit.tier), oracle_tier(hit.record, &query));
            prop_assert_eq!(hit.score, score_record(hit.record, &query));
            prop_assert!(hit.score > 0);
        }
    }

    /// Property: within a score, results keep their input order.
    #[test]
    fn prop_ties_are_stable(records in records_strategy(), query in word_strategy()) {
        let ranked = rank(&query, &records);
        let position = |record: &Record| records.iter().position(|r| std::ptr::eq(r, record)).unwrap();

        for pair in ranked.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(position(pair[0].record) < position(pair[1].record));
            }
        }
    }

    /// Property: query case never changes the result.
    #[test]
    fn prop_case_insensitive(records in records_strategy(), query in word_strategy()) {
        prop_assert_eq!(search(&query.to_uppercase(), &records), search(&query, &records));
    }

    /// Property: search is total for arbitrary queries and dataset text.
    #[test]
    fn prop_search_never_panics(query in ".{0,20}", text in ".{0,200}") {
        let _ = search(&query, text.as_str());
    }
}
