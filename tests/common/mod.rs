//! Shared test utilities and fixtures.

#![allow(dead_code)]

use wex::Record;

// Re-export canonical test utilities from wex::testing
#[allow(unused_imports)]
pub use wex::testing::{make_dataset, make_line, make_record};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small directory of sites, in the dataset's native line format.
///
/// Includes a blank line, a comment-like line, and a record missing its
/// `name` group so every parse path is exercised.
pub const SITES: &str = "\
{url=https://rust-lang.org, name={Rust, Rust Language}, description={systems programming, memory safety}}
{url=https://docs.rs, name={Docs.rs}, description={documentation for rust crates}}

# not a record
{url=https://crates.io, name={crates.io}, description={package registry}}
{url=https://example.com/rust-blog, description={a blog without a name group}}
{url=https://python.org, name={Python}, description={scripting language}}
{url=https://go.dev,name={Go},description={}}
";

/// Names of the records `SITES` parses into, in order.
pub const SITE_NAMES: &[&str] = &["Rust", "Docs.rs", "crates.io", "Python", "Go"];

/// The three-tier fixture: one record per tier, listed worst tier first.
pub fn tier_fixture() -> Vec<Record> {
    vec![
        make_record("http://foo.example/r3", &["R3"], &["unrelated"]),
        make_record("http://r2.example", &["R2"], &["mentions foo here"]),
        make_record("http://r1.example", &["R1 foo"], &["also foo"]),
    ]
}

/// First names of a result list, for compact assertions.
pub fn titles(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::title).collect()
}
