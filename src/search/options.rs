// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// Search options passed from the CLI or from JavaScript.
///
/// Every field has a default, so `{}` (or no options object at all) is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of results to return (default: all)
    pub limit: Option<usize>,
}
