// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-box suggestions.
//!
//! Candidates are record names, record ids, and the names of items reached
//! through block references. Direct item references are not consulted.
//! Distinct values are collected in discovery order, the first `limit` are
//! kept, and only then sorted, so the cut favours records early in the
//! dataset rather than alphabetically early values.

use std::collections::HashSet;

use crate::config::{DEFAULT_SUGGESTION_LIMIT, DEFAULT_SUGGESTION_MIN_QUERY_LEN};
use crate::types::{Catalogue, CompositionEntry, Interface};

/// Suggestion parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    pub limit: usize,
    pub min_query_len: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
            min_query_len: DEFAULT_SUGGESTION_MIN_QUERY_LEN,
        }
    }
}

/// Suggestions for `query`, sorted ascending. Empty when the query is
/// shorter than `options.min_query_len` chars.
pub fn suggestions(
    query: &str,
    records: &[Interface],
    catalogue: &Catalogue,
    options: SuggestOptions,
) -> Vec<String> {
    if query.chars().count() < options.min_query_len {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut collector = Collector::default();

    for record in records {
        collector.offer(&record.name, &needle);
        collector.offer(&record.id, &needle);

        for entry in &record.composition {
            let CompositionEntry::Block { id, .. } = entry else {
                continue;
            };
            let Some(block) = catalogue.block(id) else {
                continue;
            };
            for item_id in &block.items {
                if let Some(item) = catalogue.item(item_id) {
                    collector.offer(&item.name, &needle);
                }
            }
        }
    }

    let mut found = collector.ordered;
    found.truncate(options.limit);
    found.sort();
    found
}

/// Insertion-ordered set of candidate strings.
#[derive(Default)]
struct Collector {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl Collector {
    fn offer(&mut self, candidate: &str, needle: &str) {
        if !candidate.to_lowercase().contains(needle) || self.seen.contains(candidate) {
            return;
        }
        self.seen.insert(candidate.to_string());
        self.ordered.push(candidate.to_string());
    }
}
