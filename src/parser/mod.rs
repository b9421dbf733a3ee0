// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dataset parsing: raw text in, records out.
//!
//! A dataset is one record per line. Lines that don't parse are dropped
//! without telling the caller; the reason goes to the `debug` log so a
//! malformed dataset can still be diagnosed.

mod error;
mod line;

pub use error::{Field, ParseError};
pub use line::parse_line;

use crate::types::Record;
use crate::utils::trim_text;

/// Parse every non-blank line of `text`, keeping the records that parse.
///
/// Order follows the source lines. Empty input gives an empty vector.
pub fn parse_dataset(text: &str) -> Vec<Record> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (number, line) in text.split('\n').enumerate() {
        if trim_text(line).is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                tracing::debug!(line = number + 1, %err, text = trim_text(line), "skipping dataset line");
            }
        }
    }

    tracing::debug!(records = records.len(), skipped, "parsed dataset");
    records
}
