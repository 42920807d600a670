//! Predicate behavior against the fixture catalogue.
//!
//! Composed item counts in the fixture:
//!
//! | id     | category | items |
//! |--------|----------|-------|
//! | IF-001 | both     | 4     |
//! | IF-002 | none     | 1     |
//! | IF-003 | send     | 5     |
//! | IF-004 | receive  | 3     |
//! | IF-005 | send     | 2     |
//! | IF-006 | none     | 0     |

use super::common::{filter_ids, fixture_explorer};
use catalens::{AdvancedFilters, Category, CategoryFilter, FilterCriteria, RawAdvancedFilters};

fn with_advanced(f: impl FnOnce(&mut AdvancedFilters)) -> FilterCriteria {
    let mut advanced = AdvancedFilters::default();
    f(&mut advanced);
    FilterCriteria::new().with_advanced(advanced)
}

fn run(criteria: &FilterCriteria) -> Vec<String> {
    filter_ids(&mut fixture_explorer(), criteria)
}

// ============================================================================
// CATEGORY
// ============================================================================

#[test]
fn test_all_returns_every_record_in_order() {
    assert_eq!(
        run(&FilterCriteria::new()),
        vec!["IF-001", "IF-002", "IF-003", "IF-004", "IF-005", "IF-006"]
    );
}

#[test]
fn test_directional_views_include_bidirectional_records() {
    let send = FilterCriteria::new().with_category(Category::Send);
    let receive = FilterCriteria::new().with_category(Category::Receive);

    assert_eq!(run(&send), vec!["IF-001", "IF-003", "IF-005"]);
    assert_eq!(run(&receive), vec!["IF-001", "IF-004"]);
}

#[test]
fn test_both_and_none_views_are_exact() {
    let both = FilterCriteria::new().with_category(Category::Both);
    let none = FilterCriteria::new().with_category(Category::Uninvolved);

    assert_eq!(run(&both), vec!["IF-001"]);
    assert_eq!(run(&none), vec!["IF-002", "IF-006"]);
}

#[test]
fn test_category_filter_parses_dataset_spelling() {
    let parsed: CategoryFilter = "supplier_receive".parse().unwrap();
    assert_eq!(parsed, CategoryFilter::Only(Category::Receive));
    assert!("sideways".parse::<CategoryFilter>().is_err());
}

// ============================================================================
// ADVANCED FILTERS
// ============================================================================

#[test]
fn test_sender_substring_is_case_sensitive() {
    let exact = with_advanced(|f| f.sender = "Registration".to_string());
    let folded = with_advanced(|f| f.sender = "registration".to_string());

    assert_eq!(run(&exact), vec!["IF-001", "IF-004"]);
    assert!(run(&folded).is_empty());
}

#[test]
fn test_receiver_filter_fails_records_without_receiver() {
    let criteria = with_advanced(|f| f.receiver = "Supplier".to_string());
    // IF-005 has a Supplier sender but no receiver at all
    assert_eq!(run(&criteria), vec!["IF-001", "IF-004"]);
}

#[test]
fn test_has_rejection_codes() {
    let criteria = with_advanced(|f| f.has_rejection_codes = true);
    assert_eq!(run(&criteria), vec!["IF-001", "IF-003"]);
}

#[test]
fn test_item_count_bounds() {
    let at_least_3 = with_advanced(|f| f.min_data_items = 3);
    let at_most_2 = with_advanced(|f| f.max_data_items = Some(2));
    let two_to_four = with_advanced(|f| {
        f.min_data_items = 2;
        f.max_data_items = Some(4);
    });

    assert_eq!(run(&at_least_3), vec!["IF-001", "IF-003", "IF-004"]);
    assert_eq!(run(&at_most_2), vec!["IF-002", "IF-005", "IF-006"]);
    assert_eq!(run(&two_to_four), vec!["IF-001", "IF-004", "IF-005"]);
}

#[test]
fn test_explicit_zero_max_keeps_only_empty_records() {
    let raw = RawAdvancedFilters {
        max_data_items: "0".to_string(),
        ..RawAdvancedFilters::default()
    };
    let criteria = FilterCriteria::new().with_advanced(raw.into());
    assert_eq!(run(&criteria), vec!["IF-006"]);
}

#[test]
fn test_malformed_bounds_fall_back_to_defaults() {
    let raw = RawAdvancedFilters {
        min_data_items: "-3".to_string(),
        max_data_items: "many".to_string(),
        ..RawAdvancedFilters::default()
    };
    let criteria = FilterCriteria::new().with_advanced(raw.into());
    assert_eq!(run(&criteria).len(), 6);
}

#[test]
fn test_checks_combine() {
    let criteria = with_advanced(|f| {
        f.sender = "Supplier".to_string();
        f.min_data_items = 3;
    })
    .with_category(Category::Send);

    assert_eq!(run(&criteria), vec!["IF-003"]);
}

// ============================================================================
// FREE-TEXT SEARCH
// ============================================================================

#[test]
fn test_search_is_case_insensitive() {
    let criteria = FilterCriteria::new().with_search("CONSENT");
    assert_eq!(run(&criteria), vec!["IF-005"]);
}

#[test]
fn test_search_reaches_items_inside_blocks() {
    // "Meter Serial Number" only lives in block DB-01
    let criteria = FilterCriteria::new().with_search("serial");
    assert_eq!(run(&criteria), vec!["IF-001", "IF-004"]);
}

#[test]
fn test_search_reaches_direct_items() {
    let criteria = FilterCriteria::new().with_search("granularity");
    assert_eq!(run(&criteria), vec!["IF-005"]);
}

#[test]
fn test_search_terms_are_or_combined() {
    let criteria = FilterCriteria::new().with_search("granularity unmetered");
    let mut found = run(&criteria);
    found.sort();
    assert_eq!(found, vec!["IF-005", "IF-006"]);
}

#[test]
fn test_whitespace_only_search_passes_everything() {
    let criteria = FilterCriteria::new().with_search("  \t ");
    assert_eq!(run(&criteria).len(), 6);
}

#[test]
fn test_unrelated_search_matches_nothing() {
    let criteria = FilterCriteria::new().with_search("xylophone");
    assert!(run(&criteria).is_empty());
}
