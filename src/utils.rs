// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Byte order mark. Editors on Windows like to put one at the start of a file.
pub const BOM: char = '\u{FEFF}';

/// Trim whitespace and byte order marks from both ends.
///
/// `str::trim` keeps U+FEFF, which would leave a BOM glued to the `{` of the
/// first dataset line and make it unparseable.
pub fn trim_text(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}
