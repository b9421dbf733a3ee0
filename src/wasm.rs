// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings: the `WexAlgorithms` capability group.
//!
//! JavaScript hands us loosely typed values, so every entry point checks the
//! shape first and answers `[]` for anything it can't use. Nothing here
//! throws across the boundary.

use crate::search::{search_with_options, SearchOptions};
use crate::types::Record;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Stateless entry points for page scripts.
///
/// ```js
/// const records = WexAlgorithms.parseDataset(text);
/// const hits = WexAlgorithms.search("alpha", records, { limit: 10 });
/// ```
#[wasm_bindgen]
pub struct WexAlgorithms {}

#[wasm_bindgen]
impl WexAlgorithms {
    /// Parse dataset text into `Record[]`. Non-string input gives `[]`.
    #[wasm_bindgen(js_name = parseDataset)]
    pub fn parse_dataset(text: JsValue) -> JsValue {
        let records = text
            .as_string()
            .map(|text| crate::parser::parse_dataset(&text))
            .unwrap_or_default();
        to_js_array(&records)
    }

    /// Rank `dataset` (dataset text or `Record[]`) against `query`.
    ///
    /// `options` is optional; see `SearchOptions` for the accepted keys.
    #[wasm_bindgen]
    pub fn search(query: JsValue, dataset: JsValue, options: JsValue) -> JsValue {
        let Some(query) = query.as_string() else {
            return js_sys::Array::new().into();
        };
        let options = read_options(options);

        let results = if js_sys::Array::is_array(&dataset) {
            let records = read_records(&js_sys::Array::from(&dataset));
            search_with_options(&query, &records, &options)
        } else if let Some(text) = dataset.as_string() {
            search_with_options(&query, &text, &options)
        } else {
            Vec::new()
        };

        to_js_array(&results)
    }
}

/// Decode each array item on its own so one bad item doesn't sink the rest.
///
/// Field-level mistakes are absorbed by `Record`'s lenient deserializer; only
/// items that are not objects at all are skipped here.
fn read_records(items: &js_sys::Array) -> Vec<Record> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match from_value::<Record>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, %err, "skipping dataset item that is not a record");
                None
            }
        })
        .collect()
}

/// Missing or malformed options fall back to defaults.
fn read_options(options: JsValue) -> SearchOptions {
    if options.is_undefined() || options.is_null() {
        return SearchOptions::default();
    }
    from_value(options).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring malformed search options");
        SearchOptions::default()
    })
}

fn to_js_array<T: Serialize>(values: &[T]) -> JsValue {
    to_value(values).unwrap_or_else(|_| js_sys::Array::new().into())
}
