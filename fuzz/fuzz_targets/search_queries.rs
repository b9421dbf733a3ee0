// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries at a fixed dataset. The search must never panic,
//! never return a record that doesn't contain the query, and never put a
//! lower score ahead of a higher one.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use wex::{parse_dataset, rank, search, Record};

const DATASET: &str = "\
{url=https://rust-lang.org, name={Rust, Rust Language}, description={systems programming, memory safety}}
{url=https://docs.rs, name={Docs.rs}, description={documentation for rust crates}}
{url=https://مثال.إختبار, name={مثال}, description={نص عربي}}
{url=https://go.dev,name={Go},description={}}
{url=https://ǅemo.example, name={İstanbul, ß}, description={ﬁne print}}";

fuzz_target!(|query: &[u8]| {
    static RECORDS: OnceLock<Vec<Record>> = OnceLock::new();
    let records = RECORDS.get_or_init(|| parse_dataset(DATASET));

    // Cap query length to avoid timeout
    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();

    let ranked = rank(&query, records);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranking out of order");
    }

    let term = query.trim().to_lowercase();
    for hit in &ranked {
        let record = hit.record;
        let found = record
            .name
            .iter()
            .chain(&record.description)
            .chain(std::iter::once(&record.url))
            .any(|field| field.to_lowercase().contains(&term));
        assert!(found, "returned a record that does not contain the query");
    }

    assert_eq!(search(&query, records).len(), ranked.len());
});
