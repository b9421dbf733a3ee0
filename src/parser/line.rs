// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-line extraction.
//!
//! The format looks like `{url=..., name={a, b}, description={c, d}}`. It is
//! not JSON and not a grammar anyone wrote down, so each field is located
//! independently by pattern and the rest of the line is ignored. That makes
//! the extractor forgiving about spacing, field order, and unknown keys, at
//! the cost of being fooled by a `}` inside a group.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{Field, ParseError};
use crate::types::Record;
use crate::utils::trim_text;

/// `url=<token>`: everything up to the next comma.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\s*=\s*([^,]+)").expect("url pattern is valid"));

/// `name={a, b}`: the brace group, not nested.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"name\s*=\s*\{([^}]*)\}").expect("name pattern is valid"));

/// `description={c, d}`: the brace group, not nested.
static DESCRIPTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"description\s*=\s*\{([^}]*)\}").expect("description pattern is valid")
});

/// Parse one dataset line into a record.
///
/// The line must be wrapped in `{` `}` after trimming whitespace and any
/// byte order mark, and all three of `url`,
/// `name` and `description` must be present. Empty name or description groups
/// are allowed and become placeholders; a missing group is an error.
///
/// # Example
///
/// ```
/// use wex::parse_line;
///
/// let record = parse_line("{url=http://a.com, name={Alpha, A}, description={first}}").unwrap();
/// assert_eq!(record.url, "http://a.com");
/// assert_eq!(record.name, vec!["Alpha", "A"]);
/// ```
pub fn parse_line(line: &str) -> Result<Record, ParseError> {
    let line = trim_text(line);
    let content = trim_text(
        line.strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(ParseError::NotBraced)?,
    );

    let url = capture(&URL_PATTERN, content, Field::Url)?;
    let name = capture(&NAME_PATTERN, content, Field::Name)?;
    let description = capture(&DESCRIPTION_PATTERN, content, Field::Description)?;

    Ok(Record::new(
        trim_text(url),
        split_group(name),
        split_group(description),
    ))
}

/// First capture group of `pattern` in `content`.
fn capture<'a>(pattern: &Regex, content: &'a str, field: Field) -> Result<&'a str, ParseError> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ParseError::MissingField(field))
}

/// Split a brace group's interior on commas, trimming and dropping empties.
fn split_group(group: &str) -> Vec<String> {
    group
        .split(',')
        .map(trim_text)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
