// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser catalogue explorer.
//!
//! The page owns rendering, persistence and input debouncing. It hands over
//! the dataset once, then calls `filter` with the latest criteria whenever a
//! control changes and renders the returned ids in order.
//!
//! Criteria arrive as a plain object with the same shape as the JSON form of
//! [`FilterCriteria`]:
//!
//! ```text
//! { category: "all", search: "meter",
//!   advanced: { sender, receiver, minDataItems, maxDataItems,
//!               hasRejectionCodes, favoritesOnly } }
//! ```

use js_sys::Array;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::criteria::FilterCriteria;
use crate::dataset::Dataset;
use crate::preferences::Preferences;
use crate::session::Explorer;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn id_array<'a>(ids: impl IntoIterator<Item = &'a str>) -> Array {
    ids.into_iter().map(JsValue::from_str).collect()
}

/// WASM-accessible explorer session.
#[wasm_bindgen]
pub struct CatalensExplorer {
    inner: Explorer,
}

#[wasm_bindgen]
impl CatalensExplorer {
    /// Create a session from the dataset JSON text and, optionally, the
    /// preferences JSON previously produced by `exportPreferences`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        dataset_json: &str,
        preferences_json: Option<String>,
    ) -> Result<CatalensExplorer, JsValue> {
        let dataset = Dataset::from_json_str(dataset_json).map_err(to_js_error)?;
        let preferences = match preferences_json {
            Some(json) => serde_json::from_str::<Preferences>(&json).map_err(to_js_error)?,
            None => Preferences::default(),
        };
        Ok(CatalensExplorer {
            inner: Explorer::new(dataset).with_preferences(preferences),
        })
    }

    /// Ids of the records matching `criteria`, in display order.
    #[wasm_bindgen]
    pub fn filter(&mut self, criteria: JsValue) -> Result<Array, JsValue> {
        let criteria: FilterCriteria = if criteria.is_undefined() || criteria.is_null() {
            FilterCriteria::default()
        } else {
            from_value(criteria).map_err(to_js_error)?
        };
        let records = self.inner.filter(&criteria);
        Ok(id_array(records.iter().map(|record| record.id.as_str())))
    }

    /// Flip a favorite; returns the new state.
    #[wasm_bindgen(js_name = toggleFavorite)]
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.inner.toggle_favorite(id)
    }

    #[wasm_bindgen(js_name = isFavorite)]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.inner.is_favorite(id)
    }

    #[wasm_bindgen(js_name = recordView)]
    pub fn record_view(&mut self, id: &str) {
        self.inner.record_view(id);
    }

    /// Recently viewed ids still present in the dataset, most recent first.
    #[wasm_bindgen(js_name = recentlyViewed)]
    pub fn recently_viewed(&self) -> Array {
        id_array(
            self.inner
                .recently_viewed()
                .into_iter()
                .map(|record| record.id.as_str()),
        )
    }

    #[wasm_bindgen]
    pub fn suggestions(&self, query: &str) -> Array {
        self.inner
            .suggestions(query)
            .iter()
            .map(|s| JsValue::from_str(s))
            .collect()
    }

    /// Leaf data items reachable from record `id`; `undefined` if unknown.
    #[wasm_bindgen(js_name = composedItemCount)]
    pub fn composed_item_count(&self, id: &str) -> Option<usize> {
        self.inner.composed_item_count(id)
    }

    /// Lower-cased searchable text of record `id`, for highlighting.
    #[wasm_bindgen(js_name = searchableContent)]
    pub fn searchable_content(&self, id: &str) -> Option<String> {
        self.inner.searchable_content(id)
    }

    /// Resolved display sections of record `id`; `null` if unknown.
    #[wasm_bindgen(js_name = compositionView)]
    pub fn composition_view(&self, id: &str) -> Result<JsValue, JsValue> {
        to_value(&self.inner.composition_view(id)).map_err(to_js_error)
    }

    /// Resolved rejection codes of record `id`, or a catalogue search when
    /// `query` is given instead.
    #[wasm_bindgen(js_name = rejectionCodes)]
    pub fn rejection_codes(
        &self,
        id: Option<String>,
        query: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let codes = match (id, query) {
            (Some(id), _) => self.inner.rejection_codes_for(&id),
            (None, query) => self
                .inner
                .search_rejection_codes(query.as_deref().unwrap_or("")),
        };
        to_value(&codes).map_err(to_js_error)
    }

    /// Preferences as JSON, for the page to persist however it likes.
    #[wasm_bindgen(js_name = exportPreferences)]
    pub fn export_preferences(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.preferences()).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = cacheStats)]
    pub fn cache_stats(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.cache_stats()).map_err(to_js_error)
    }
}
