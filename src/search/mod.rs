// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: query plus dataset in, ranked records out.
//!
//! Raw dataset text is parsed fresh on every call; nothing is cached between
//! searches. Every function here is total. Blank queries, empty datasets, and
//! datasets with no parseable lines all come back as an empty vector, which
//! callers should read as "no matches".

mod options;

pub use options::SearchOptions;

use crate::parser::parse_dataset;
use crate::scoring::ranking::sort_matches;
use crate::scoring::{match_tier, normalize_query, tier_score};
use crate::types::{Dataset, Record, ScoredMatch};

/// Search `dataset` for `query` and return the matching records, best first.
///
/// `dataset` is either raw dataset text or records parsed earlier:
///
/// ```
/// use wex::{parse_dataset, search};
///
/// let text = "{url=http://a.com,name={Alpha},description={first item}}\n\
///             {url=http://b.com,name={Beta},description={contains alpha}}";
///
/// let from_text = search("alpha", text);
/// assert_eq!(from_text[0].name, vec!["Alpha"]);
/// assert_eq!(from_text[1].name, vec!["Beta"]);
///
/// let records = parse_dataset(text);
/// assert_eq!(search("ALPHA", &records), from_text);
/// ```
pub fn search<'a>(query: &str, dataset: impl Into<Dataset<'a>>) -> Vec<Record> {
    search_with_options(query, dataset, &SearchOptions::default())
}

/// [`search`] with result limiting.
pub fn search_with_options<'a>(
    query: &str,
    dataset: impl Into<Dataset<'a>>,
    options: &SearchOptions,
) -> Vec<Record> {
    if normalize_query(query).is_none() {
        return Vec::new();
    }

    let parsed;
    let records: &[Record] = match dataset.into() {
        Dataset::Records(records) => records,
        Dataset::Text(text) => {
            parsed = parse_dataset(text);
            &parsed
        }
    };

    let matches = rank(query, records);
    tracing::debug!(
        query,
        candidates = records.len(),
        matches = matches.len(),
        "search complete"
    );

    matches
        .into_iter()
        .take(options.limit.unwrap_or(usize::MAX))
        .map(|m| m.record.clone())
        .collect()
}

/// Score every record against `query` and rank the hits.
///
/// Same rules as [`search`], but keeps the score and tier of each match.
/// Records that score zero are left out.
pub fn rank<'r>(query: &str, records: &'r [Record]) -> Vec<ScoredMatch<'r>> {
    let Some(term) = normalize_query(query) else {
        return Vec::new();
    };

    let mut matches: Vec<ScoredMatch<'r>> = records
        .iter()
        .filter_map(|record| {
            match_tier(record, &term).map(|tier| ScoredMatch {
                record,
                score: tier_score(tier),
                tier,
            })
        })
        .collect();

    sort_matches(&mut matches);
    matches
}
