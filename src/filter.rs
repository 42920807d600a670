// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inclusion test: does one interface pass the current criteria?
//!
//! Checks run cheapest first and stop at the first failure:
//!
//! ```text
//! category → sender → receiver → rejection codes → favorites → item count → search
//! ```
//!
//! Free-text search goes last because it is the only check that builds the
//! searchable content blob and runs edit distance.
//!
//! Two behaviours are kept exactly as users have come to rely on them:
//! sender/receiver filters are case-sensitive substring checks while search is
//! case-insensitive, and search terms are OR-combined (any one term matching is
//! enough).

use crate::content::{composed_item_count, searchable_content};
use crate::criteria::FilterCriteria;
use crate::fuzzy::{fuzzy_match_folded, DEFAULT_THRESHOLD};
use crate::preferences::Preferences;
use crate::types::{Catalogue, Interface};

/// One filter pass's worth of state, built once and applied per record.
///
/// Splitting the search term is done here rather than per record.
pub struct Predicate<'a> {
    criteria: &'a FilterCriteria,
    terms: Vec<String>,
    catalogue: &'a Catalogue,
    preferences: &'a Preferences,
    threshold: f64,
}

impl<'a> Predicate<'a> {
    pub fn new(
        criteria: &'a FilterCriteria,
        catalogue: &'a Catalogue,
        preferences: &'a Preferences,
    ) -> Self {
        Self {
            criteria,
            terms: criteria.search_terms(),
            catalogue,
            preferences,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Override the per-term fuzzy threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Does `record` pass every check?
    pub fn matches(&self, record: &Interface) -> bool {
        let advanced = &self.criteria.advanced;

        if !self.criteria.category.admits(record.category) {
            return false;
        }
        if !contains_filter(record.sender.as_deref(), &advanced.sender) {
            return false;
        }
        if !contains_filter(record.receiver.as_deref(), &advanced.receiver) {
            return false;
        }
        if advanced.has_rejection_codes && !record.has_rejection_codes() {
            return false;
        }
        if advanced.favorites_only && !self.preferences.is_favorite(&record.id) {
            return false;
        }
        if !advanced.admits_item_count(composed_item_count(record, self.catalogue)) {
            return false;
        }

        self.matches_search(record)
    }

    fn matches_search(&self, record: &Interface) -> bool {
        if self.terms.is_empty() {
            return true;
        }

        let content = searchable_content(record, self.catalogue);
        self.terms
            .iter()
            .any(|term| fuzzy_match_folded(term, &content, self.threshold).matches)
    }

    /// Indices of the passing records, in dataset order.
    pub fn select(&self, records: &[Interface]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Case-sensitive substring filter. An empty filter passes everything; a
/// non-empty filter fails an absent field.
fn contains_filter(field: Option<&str>, filter: &str) -> bool {
    filter.is_empty() || field.is_some_and(|value| value.contains(filter))
}

/// One-shot form of [`Predicate::matches`] with the default threshold.
pub fn matches(
    record: &Interface,
    criteria: &FilterCriteria,
    catalogue: &Catalogue,
    preferences: &Preferences,
) -> bool {
    Predicate::new(criteria, catalogue, preferences).matches(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::AdvancedFilters;
    use crate::testing::{make_block, make_catalogue, make_interface, make_item};
    use crate::types::{Category, CompositionEntry};

    fn advanced(f: impl FnOnce(&mut AdvancedFilters)) -> FilterCriteria {
        let mut filters = AdvancedFilters::default();
        f(&mut filters);
        FilterCriteria::new().with_advanced(filters)
    }

    fn check(record: &Interface, criteria: &FilterCriteria) -> bool {
        matches(record, criteria, &Catalogue::default(), &Preferences::default())
    }

    #[test]
    fn test_default_criteria_pass_everything() {
        let record = make_interface("IF-1", "Anything", Category::Uninvolved);
        assert!(check(&record, &FilterCriteria::new()));
    }

    #[test]
    fn test_category_views() {
        let both = make_interface("IF-1", "Two way", Category::Both);
        let send_only = make_interface("IF-2", "One way", Category::Send);

        let send = FilterCriteria::new().with_category(Category::Send);
        let receive = FilterCriteria::new().with_category(Category::Receive);

        assert!(check(&both, &send));
        assert!(check(&both, &receive));
        assert!(check(&send_only, &send));
        assert!(!check(&send_only, &receive));
    }

    #[test]
    fn test_sender_filter_is_case_sensitive() {
        let mut record = make_interface("IF-1", "X", Category::Send);
        record.sender = Some("Registration Service".to_string());

        assert!(check(&record, &advanced(|f| f.sender = "Registration".to_string())));
        assert!(!check(&record, &advanced(|f| f.sender = "registration".to_string())));
    }

    #[test]
    fn test_absent_receiver_fails_non_empty_filter() {
        let record = make_interface("IF-1", "X", Category::Send);
        assert!(!check(&record, &advanced(|f| f.receiver = "Supplier".to_string())));
        assert!(check(&record, &advanced(|f| f.receiver = String::new())));
    }

    #[test]
    fn test_rejection_code_requirement() {
        let mut record = make_interface("IF-1", "X", Category::Send);
        let criteria = advanced(|f| f.has_rejection_codes = true);
        assert!(!check(&record, &criteria));

        record.rejection_code_ids = vec!["ER-1".to_string()];
        assert!(check(&record, &criteria));
    }

    #[test]
    fn test_favorites_only_reads_preferences() {
        let record = make_interface("IF-1", "X", Category::Send);
        let criteria = advanced(|f| f.favorites_only = true);
        let catalogue = Catalogue::default();

        let mut preferences = Preferences::default();
        assert!(!matches(&record, &criteria, &catalogue, &preferences));

        preferences.toggle_favorite("IF-1");
        assert!(matches(&record, &criteria, &catalogue, &preferences));
    }

    #[test]
    fn test_item_count_bounds_count_through_blocks() {
        let catalogue = make_catalogue(
            vec![("DI-1", make_item("A", "a"))],
            vec![("DB-1", make_block("Block", &["DI-1", "DI-2", "DI-3"]))],
        );
        let mut record = make_interface("IF-1", "X", Category::Send);
        record.composition = vec![CompositionEntry::block("DB-1")];
        let preferences = Preferences::default();

        let at_least_3 = advanced(|f| f.min_data_items = 3);
        let at_most_2 = advanced(|f| f.max_data_items = Some(2));
        assert!(matches(&record, &at_least_3, &catalogue, &preferences));
        assert!(!matches(&record, &at_most_2, &catalogue, &preferences));
    }

    #[test]
    fn test_search_terms_are_or_combined() {
        let record = make_interface("IF-1", "Meter Reading Request", Category::Send);

        let one_hit = FilterCriteria::new().with_search("qqqqqqqq reading");
        assert!(check(&record, &one_hit));

        let no_hit = FilterCriteria::new().with_search("qqqqqqqq wwwwwwww");
        assert!(!check(&record, &no_hit));
    }

    #[test]
    fn test_search_reaches_catalogue_items() {
        let catalogue = make_catalogue(
            vec![("DI-033", make_item("Energisation Status", "Energised or not"))],
            vec![],
        );
        let mut record = make_interface("IF-1", "Status Update", Category::Send);
        record.composition = vec![CompositionEntry::item("DI-033")];
        let preferences = Preferences::default();

        let criteria = FilterCriteria::new().with_search("ENERGISATION");
        assert!(matches(&record, &criteria, &catalogue, &preferences));
        assert!(!check(&record, &criteria));
    }

    #[test]
    fn test_select_keeps_dataset_order() {
        let records = vec![
            make_interface("IF-1", "Alpha", Category::Send),
            make_interface("IF-2", "Beta", Category::Uninvolved),
            make_interface("IF-3", "Gamma", Category::Both),
        ];
        let criteria = FilterCriteria::new().with_category(Category::Send);
        let catalogue = Catalogue::default();
        let preferences = Preferences::default();

        let selected = Predicate::new(&criteria, &catalogue, &preferences).select(&records);
        assert_eq!(selected, vec![0, 2]);
    }
}
