// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matching records get their numbers and their order.
//!
//! Each record earns exactly one tier score or nothing. The tiers are checked
//! name first, then description, then url, and the first hit wins. Scores are
//! never summed, so a record that mentions the query everywhere still only
//! counts as a name match.

mod tier;
pub mod ranking;

pub use tier::*;
