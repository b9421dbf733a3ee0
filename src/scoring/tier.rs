// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-tier score.
//!
//! # Constants
//!
//! | Tier        | Score | Checked when            |
//! |-------------|-------|-------------------------|
//! | Name        | 10    | always                  |
//! | Description | 5     | name did not match      |
//! | Url         | 3     | neither of the above    |
//!
//! Because tiers are exclusive the absolute values only matter for their
//! order: `NAME_SCORE > DESCRIPTION_SCORE > URL_SCORE > 0`.

use crate::types::{MatchTier, Record};
use crate::utils::trim_text;

/// Score for a query found in any of the record's names.
pub const NAME_SCORE: u32 = 10;

/// Score for a query found in a description when no name matched.
pub const DESCRIPTION_SCORE: u32 = 5;

/// Score for a query found in the url when nothing else matched.
pub const URL_SCORE: u32 = 3;

/// Base score for a tier.
pub const fn tier_score(tier: MatchTier) -> u32 {
    match tier {
        MatchTier::Name => NAME_SCORE,
        MatchTier::Description => DESCRIPTION_SCORE,
        MatchTier::Url => URL_SCORE,
    }
}

/// Normalize a raw query for matching: trim (byte order marks included), then
/// lowercase.
///
/// Returns `None` when nothing is left to search for.
pub fn normalize_query(query: &str) -> Option<String> {
    let term = trim_text(query).to_lowercase();
    (!term.is_empty()).then_some(term)
}

/// Which tier, if any, `term` matches in `record`.
///
/// `term` must already be lowercased (see [`normalize_query`]); the record's
/// fields are lowercased here so the comparison is case-insensitive.
pub fn match_tier(record: &Record, term: &str) -> Option<MatchTier> {
    if any_contains(&record.name, term) {
        Some(MatchTier::Name)
    } else if any_contains(&record.description, term) {
        Some(MatchTier::Description)
    } else if contains_lowercase(&record.url, term) {
        Some(MatchTier::Url)
    } else {
        None
    }
}

/// Score `record` against an already-normalized `term`. Zero means no match.
pub fn score_record(record: &Record, term: &str) -> u32 {
    match_tier(record, term).map_or(0, tier_score)
}

fn any_contains(values: &[String], term: &str) -> bool {
    values.iter().any(|value| contains_lowercase(value, term))
}

fn contains_lowercase(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}
