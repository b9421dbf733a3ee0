// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search: records, their scored matches, and the
//! two shapes a dataset can arrive in.
//!
//! # Invariants
//!
//! - **Record**: `!name.is_empty() ∧ !description.is_empty()`.
//!   A parsed record always carries at least one name and one description,
//!   falling back to a placeholder when the source line had none.
//!
//! - **ScoredMatch**: `score > 0`. Records that match nothing never get wrapped.
//!
//! - **MatchTier**: `Name > Description > Url`. Tiers are exclusive; a record
//!   lands in exactly one of them or in none.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder stored in `Record::name` when a line had an empty name group.
pub const NO_NAME_PLACEHOLDER: &str = "بدون اسم";

/// Placeholder stored in `Record::description` when a line had an empty description group.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "بدون وصف";

/// One parsed dataset entry.
///
/// Serializes as `{ "url": "...", "name": [...], "description": [...] }`, the
/// same shape JavaScript callers hand back to `search` as a pre-parsed dataset.
///
/// Deserialization is lenient per field: a `url` that is not a string becomes
/// `""`, a `name` or `description` that is not an array becomes `[]`, and
/// non-string entries inside those arrays are dropped. One malformed field
/// only costs that field its tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Link target. May be empty.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub url: String,
    /// Display names, in source order.
    #[serde(default, deserialize_with = "deserialize_lenient_strings")]
    pub name: Vec<String>,
    /// Description fragments, in source order.
    #[serde(default, deserialize_with = "deserialize_lenient_strings")]
    pub description: Vec<String>,
}

/// A value of the expected type, or anything else (consumed and ignored).
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_value(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Lenient::<String>::deserialize(deserializer)?;
    Ok(value.into_value().unwrap_or_default())
}

fn deserialize_lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Lenient::<Vec<Lenient<String>>>::deserialize(deserializer)?;
    Ok(values
        .into_value()
        .unwrap_or_default()
        .into_iter()
        .filter_map(Lenient::into_value)
        .collect())
}

impl Record {
    /// Build a record, substituting placeholders for empty name or description lists.
    pub fn new(url: impl Into<String>, name: Vec<String>, description: Vec<String>) -> Self {
        Self {
            url: url.into(),
            name: or_placeholder(name, NO_NAME_PLACEHOLDER),
            description: or_placeholder(description, NO_DESCRIPTION_PLACEHOLDER),
        }
    }

    /// First display name. Always present for parsed records.
    pub fn title(&self) -> &str {
        self.name.first().map(String::as_str).unwrap_or(NO_NAME_PLACEHOLDER)
    }
}

fn or_placeholder(values: Vec<String>, placeholder: &str) -> Vec<String> {
    if values.is_empty() {
        vec![placeholder.to_string()]
    } else {
        values
    }
}

/// Which field a query matched in.
///
/// Ordered best-first so that `Name < Description < Url` sorts the strongest
/// tier to the front, the same way the score constants order them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Name,
    Description,
    Url,
}

impl MatchTier {
    /// Lowercase label used in logs and CLI badges.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Name => "name",
            MatchTier::Description => "description",
            MatchTier::Url => "url",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record paired with the score it earned for one query.
///
/// Lives only for the duration of a ranking call and borrows the record it
/// scores; `search` projects these back to plain records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub record: &'a Record,
    pub score: u32,
    pub tier: MatchTier,
}

/// Input to `search`: raw dataset text or records that were parsed earlier.
#[derive(Debug, Clone, Copy)]
pub enum Dataset<'a> {
    Text(&'a str),
    Records(&'a [Record]),
}

impl<'a> From<&'a str> for Dataset<'a> {
    fn from(text: &'a str) -> Self {
        Dataset::Text(text)
    }
}

impl<'a> From<&'a String> for Dataset<'a> {
    fn from(text: &'a String) -> Self {
        Dataset::Text(text.as_str())
    }
}

impl<'a> From<&'a [Record]> for Dataset<'a> {
    fn from(records: &'a [Record]) -> Self {
        Dataset::Records(records)
    }
}

impl<'a> From<&'a Vec<Record>> for Dataset<'a> {
    fn from(records: &'a Vec<Record>) -> Self {
        Dataset::Records(records.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [Record; N]> for Dataset<'a> {
    fn from(records: &'a [Record; N]) -> Self {
        Dataset::Records(records.as_slice())
    }
}
