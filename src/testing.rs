// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Record;

/// Create a record from borrowed parts, placeholders applied as in parsing.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(url: &str, names: &[&str], descriptions: &[&str]) -> Record {
    Record::new(
        url,
        names.iter().map(|s| s.to_string()).collect(),
        descriptions.iter().map(|s| s.to_string()).collect(),
    )
}

/// Render a well-formed dataset line for the given fields.
pub fn make_line(url: &str, names: &[&str], descriptions: &[&str]) -> String {
    format!(
        "{{url={},name={{{}}},description={{{}}}}}",
        url,
        names.join(","),
        descriptions.join(",")
    )
}

/// Render a whole dataset, one line per record.
pub fn make_dataset(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| {
            let names: Vec<&str> = r.name.iter().map(String::as_str).collect();
            let descriptions: Vec<&str> = r.description.iter().map(String::as_str).collect();
            make_line(&r.url, &names, &descriptions)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
