// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for single-line parsing.
//!
//! Any byte sequence, read as text, must either parse into a complete record
//! or be rejected. Never a panic, never a record with an empty name list.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wex::{parse_dataset, parse_line};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    if let Ok(record) = parse_line(&text) {
        assert!(!record.name.is_empty(), "record without a name list");
        assert!(!record.description.is_empty(), "record without a description list");
        assert!(record.name.iter().all(|n| !n.is_empty()));
        assert!(record.description.iter().all(|d| !d.is_empty()));
        assert_eq!(record.url, record.url.trim());
    }

    // A single line can yield at most one record.
    if !text.contains('\n') {
        assert!(parse_dataset(&text).len() <= 1);
    }
});
