// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored matches get sorted.
//!
//! Higher score first. Equal scores keep the order the records had in the
//! dataset; `sort_by` is stable, so that falls out of the sort itself rather
//! than needing an explicit tiebreaker.

use crate::types::ScoredMatch;
use std::cmp::Ordering;

/// Compare two matches for ranking: descending score.
///
/// Returns `Equal` for equal scores so a stable sort preserves input order.
pub fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Sort matches in place, best first, ties in input order.
pub fn sort_matches(matches: &mut [ScoredMatch<'_>]) {
    matches.sort_by(compare_matches);
}
