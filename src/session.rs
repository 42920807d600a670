// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The explicit session context: dataset, preferences and result cache in one
//! owner, driven by one caller at a time.
//!
//! # Filter flow
//!
//! ```text
//! criteria ──▶ cache key ──▶ hit? ──yes──▶ cached indices
//!                             │
//!                             no
//!                             ▼
//!              predicate over every record (dataset order)
//!                             ▼
//!              rank (only when a search term is present)
//!                             ▼
//!              store, evict oldest past capacity
//! ```
//!
//! Nothing here is shared across threads. Debouncing rapid input is the
//! caller's job; the session simply answers the latest criteria.

use crate::cache::{CacheStats, ResultCache};
use crate::config::ExplorerConfig;
use crate::content::{self, Section};
use crate::criteria::{CriteriaKey, FilterCriteria};
use crate::dataset::Dataset;
use crate::filter::Predicate;
use crate::preferences::Preferences;
use crate::rejection::{self, CodeEntry};
use crate::scoring::ranking::rank;
use crate::suggest::{self, SuggestOptions};
use crate::types::Interface;

/// One user's browsing session over a loaded dataset.
#[derive(Debug)]
pub struct Explorer {
    dataset: Dataset,
    preferences: Preferences,
    config: ExplorerConfig,
    cache: ResultCache<CriteriaKey, Vec<usize>>,
}

impl Explorer {
    /// A session with default configuration and empty preferences.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_config(dataset, ExplorerConfig::default())
    }

    pub fn with_config(dataset: Dataset, config: ExplorerConfig) -> Self {
        Self {
            dataset,
            preferences: Preferences::new().with_recent_limit(config.recent_limit),
            cache: ResultCache::with_capacity(config.cache_capacity),
            config,
        }
    }

    /// Replace the preferences, e.g. with ones loaded from a store.
    ///
    /// Cached favorites-only views stay keyed to the old favorites set.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        let mut preferences = preferences.with_recent_limit(self.config.recent_limit);
        preferences.supersede(self.preferences.revision());
        self.preferences = preferences;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn record(&self, id: &str) -> Option<&Interface> {
        self.dataset.record(id)
    }

    /// Records passing `criteria`, in display order.
    ///
    /// Repeating structurally equal criteria is a cache hit and returns the
    /// same order without re-running the predicate.
    pub fn filter(&mut self, criteria: &FilterCriteria) -> Vec<&Interface> {
        let key = criteria.cache_key(self.preferences.revision());
        let dataset = &self.dataset;
        let preferences = &self.preferences;
        let threshold = self.config.fuzzy_threshold;

        let indices = self.cache.get_or_insert_with(key, || {
            let records = dataset.interfaces();
            let selected = Predicate::new(criteria, dataset.catalogue(), preferences)
                .with_threshold(threshold)
                .select(records);
            rank(selected, records, criteria, dataset.catalogue())
        });

        tracing::debug!(result_count = indices.len(), "filter applied");
        let records = dataset.interfaces();
        indices.iter().map(|&index| &records[index]).collect()
    }

    /// Flip a record's favorite state and return the new state.
    ///
    /// Unknown ids are accepted; they simply never match anything.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = self.preferences.toggle_favorite(id);
        tracing::debug!(id, now_favorite, "favorite toggled");
        now_favorite
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.preferences.is_favorite(id)
    }

    pub fn record_view(&mut self, id: &str) {
        self.preferences.record_view(id);
    }

    /// Recently viewed records, most recent first. Ids no longer in the
    /// dataset are skipped.
    pub fn recently_viewed(&self) -> Vec<&Interface> {
        self.preferences
            .recently_viewed()
            .filter_map(|id| self.dataset.record(id))
            .collect()
    }

    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let options = SuggestOptions {
            limit: self.config.suggestion_limit,
            min_query_len: self.config.suggestion_min_query_len,
        };
        suggest::suggestions(
            query,
            self.dataset.interfaces(),
            self.dataset.catalogue(),
            options,
        )
    }

    /// Resolved rejection codes of record `id`; empty for unknown records.
    pub fn rejection_codes_for(&self, id: &str) -> Vec<CodeEntry<'_>> {
        self.dataset
            .record(id)
            .map(|record| rejection::rejection_codes_for(record, self.dataset.catalogue()))
            .unwrap_or_default()
    }

    pub fn search_rejection_codes(&self, query: &str) -> Vec<CodeEntry<'_>> {
        rejection::search_rejection_codes(query, self.dataset.catalogue())
    }

    pub fn composed_item_count(&self, id: &str) -> Option<usize> {
        self.dataset
            .record(id)
            .map(|record| content::composed_item_count(record, self.dataset.catalogue()))
    }

    pub fn searchable_content(&self, id: &str) -> Option<String> {
        self.dataset
            .record(id)
            .map(|record| content::searchable_content(record, self.dataset.catalogue()))
    }

    pub fn composition_view(&self, id: &str) -> Option<Vec<Section<'_>>> {
        self.dataset
            .record(id)
            .map(|record| content::composition_view(record, self.dataset.catalogue()))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
