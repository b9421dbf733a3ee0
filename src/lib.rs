// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parse loosely structured record datasets and rank them against a text query.
//!
//! A dataset is line-delimited text where each line looks like
//! `{url=..., name={a, b}, description={c, d}}`. The crate turns lines into
//! [`Record`]s and ranks records by where a query appears in them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  parser/    │────▶│  scoring/    │────▶│  search/    │
//! │ (parse_line,│     │ (tier score, │     │ (search,    │
//! │ parse_data- │     │  stable      │     │  rank)      │
//! │  set)       │     │  ranking)    │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      types.rs                        │
//! │      (Record, ScoredMatch, MatchTier, Dataset)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Scoring
//!
//! | Tier        | Score |
//! |-------------|-------|
//! | Name        | 10    |
//! | Description | 5     |
//! | Url         | 3     |
//!
//! Tiers are exclusive and checked in that order. Equal scores keep dataset order.
//!
//! # Usage
//!
//! ```
//! use wex::{parse_dataset, search};
//!
//! let text = "{url=http://a.com,name={Alpha},description={first item}}\n\
//!             {url=http://b.com,name={Beta},description={contains alpha}}";
//!
//! let records = parse_dataset(text);
//! assert_eq!(records.len(), 2);
//!
//! let results = search("alpha", &records);
//! assert_eq!(results[0].url, "http://a.com");
//! assert_eq!(results[1].url, "http://b.com");
//! ```

// Module declarations
mod parser;
pub mod scoring;
mod search;
mod types;
mod utils;

pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use parser::{parse_dataset, parse_line, Field, ParseError};
pub use scoring::{score_record, DESCRIPTION_SCORE, NAME_SCORE, URL_SCORE};
pub use search::{rank, search, search_with_options, SearchOptions};
pub use types::{
    Dataset, MatchTier, Record, ScoredMatch, NO_DESCRIPTION_PLACEHOLDER, NO_NAME_PLACEHOLDER,
};
