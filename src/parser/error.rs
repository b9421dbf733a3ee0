// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// A field the line grammar has to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Url,
    Name,
    Description,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Url => "url",
            Field::Name => "name",
            Field::Description => "description",
        })
    }
}

/// Why a line was not turned into a record.
///
/// Callers only learn that the line was skipped; the variant exists so the
/// debug log can say why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line is not wrapped in braces")]
    NotBraced,

    #[error("no `{0}` field found")]
    MissingField(Field),
}
