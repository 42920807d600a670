// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Criteria snapshots: what the user is currently filtering by.
//!
//! A [`FilterCriteria`] is a plain value. It is recomputed whenever any control
//! changes and has no identity beyond its fields, so it doubles as the cache
//! key: two structurally equal snapshots hash and compare equal, and field
//! order never enters into it.
//!
//! Front ends hand over raw control values ([`RawAdvancedFilters`]). Bounds
//! that don't read as numbers are coerced to their defaults rather than
//! rejected.

use serde::{Deserialize, Serialize};

use crate::types::CategoryFilter;

/// Full set of active filter values at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub search: String,
    pub advanced: AdvancedFilters,
}

/// The advanced-filter bundle.
///
/// `max_data_items == None` means unbounded. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedFilters {
    pub sender: String,
    pub receiver: String,
    pub min_data_items: usize,
    pub max_data_items: Option<usize>,
    pub has_rejection_codes: bool,
    pub favorites_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_advanced(mut self, advanced: AdvancedFilters) -> Self {
        self.advanced = advanced;
        self
    }

    /// Lower-cased whitespace-separated search terms, empties dropped.
    pub fn search_terms(&self) -> Vec<String> {
        self.search
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// The whole search term used for ranking, lower-cased but otherwise as
    /// typed (surrounding whitespace included), or `None` when it is blank.
    pub fn ranking_term(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    /// Key under which results for this snapshot are cached.
    ///
    /// Favorites are not part of the snapshot, yet a favorites-only view
    /// depends on them. The preferences revision is folded in for exactly
    /// that case and left out otherwise, so toggling a favorite never splits
    /// the cache for views that ignore favorites.
    pub fn cache_key(&self, favorites_revision: u64) -> CriteriaKey {
        CriteriaKey {
            criteria: self.clone(),
            favorites_revision: self
                .advanced
                .favorites_only
                .then_some(favorites_revision),
        }
    }
}

impl AdvancedFilters {
    /// Is `count` within `[min_data_items, max_data_items]`?
    pub fn admits_item_count(&self, count: usize) -> bool {
        count >= self.min_data_items && self.max_data_items.map_or(true, |max| count <= max)
    }
}

/// Structural cache key: the snapshot plus whatever outside state it reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CriteriaKey {
    criteria: FilterCriteria,
    favorites_revision: Option<u64>,
}

impl CriteriaKey {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }
}

// =============================================================================
// RAW INPUT COERCION
// =============================================================================

/// Advanced filters as typed into a form: bounds are free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAdvancedFilters {
    pub sender: String,
    pub receiver: String,
    pub min_data_items: String,
    pub max_data_items: String,
    pub has_rejection_codes: bool,
    pub favorites_only: bool,
}

impl From<RawAdvancedFilters> for AdvancedFilters {
    fn from(raw: RawAdvancedFilters) -> Self {
        AdvancedFilters {
            sender: raw.sender,
            receiver: raw.receiver,
            min_data_items: parse_bound(&raw.min_data_items).unwrap_or(0),
            max_data_items: parse_bound(&raw.max_data_items),
            has_rejection_codes: raw.has_rejection_codes,
            favorites_only: raw.favorites_only,
        }
    }
}

/// Read a count bound the way a number field is read: leading whitespace,
/// an optional `+`, then the leading run of digits. Anything else (empty,
/// negative, non-numeric, overflowing) is `None`.
pub fn parse_bound(input: &str) -> Option<usize> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::collections::HashSet;

    #[test]
    fn test_search_terms_drop_empties_and_fold_case() {
        let criteria = FilterCriteria::new().with_search("  Meter   READING ");
        assert_eq!(criteria.search_terms(), vec!["meter", "reading"]);
        assert!(FilterCriteria::new().with_search("   ").search_terms().is_empty());
    }

    #[test]
    fn test_ranking_term_is_whole_term_as_typed() {
        let criteria = FilterCriteria::new().with_search(" Meter Reading ");
        assert_eq!(criteria.ranking_term().as_deref(), Some(" meter reading "));
        assert_eq!(FilterCriteria::new().with_search(" \t").ranking_term(), None);
    }

    #[test]
    fn test_item_count_bounds_are_inclusive() {
        let filters = AdvancedFilters {
            min_data_items: 5,
            max_data_items: Some(7),
            ..AdvancedFilters::default()
        };
        assert!(!filters.admits_item_count(4));
        assert!(filters.admits_item_count(5));
        assert!(filters.admits_item_count(7));
        assert!(!filters.admits_item_count(8));
        assert!(AdvancedFilters::default().admits_item_count(usize::MAX));
    }

    #[test]
    fn test_parse_bound_reads_leading_digits() {
        assert_eq!(parse_bound("12"), Some(12));
        assert_eq!(parse_bound("  12abc"), Some(12));
        assert_eq!(parse_bound("+3"), Some(3));
        assert_eq!(parse_bound("0"), Some(0));
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("-4"), None);
        assert_eq!(parse_bound("99999999999999999999999999"), None);
    }

    #[test]
    fn test_raw_filters_coerce_to_defaults() {
        let raw = RawAdvancedFilters {
            min_data_items: "lots".to_string(),
            max_data_items: String::new(),
            ..RawAdvancedFilters::default()
        };
        let filters = AdvancedFilters::from(raw);
        assert_eq!(filters.min_data_items, 0);
        assert_eq!(filters.max_data_items, None);
    }

    #[test]
    fn test_equal_snapshots_share_a_key() {
        let a = FilterCriteria::new()
            .with_category(Category::Send)
            .with_search("meter");
        let b = FilterCriteria::new()
            .with_search("meter")
            .with_category(Category::Send);

        let keys: HashSet<_> = [a.cache_key(0), b.cache_key(0)].into_iter().collect();
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_revision_only_matters_for_favorites_only() {
        let plain = FilterCriteria::new();
        assert_eq!(plain.cache_key(1), plain.cache_key(2));

        let favorites = FilterCriteria::new().with_advanced(AdvancedFilters {
            favorites_only: true,
            ..AdvancedFilters::default()
        });
        assert_ne!(favorites.cache_key(1), favorites.cache_key(2));
    }

    #[test]
    fn test_criteria_json_field_names() {
        let json = r#"{
            "category": "supplier_receive",
            "search": "meter",
            "advanced": {"minDataItems": 5, "hasRejectionCodes": true}
        }"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.category, CategoryFilter::Only(Category::Receive));
        assert_eq!(criteria.advanced.min_data_items, 5);
        assert_eq!(criteria.advanced.max_data_items, None);
        assert!(criteria.advanced.has_rejection_codes);
    }
}
