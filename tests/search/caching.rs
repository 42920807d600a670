//! Result cache behavior as seen through a session.

use super::common::{filter_ids, fixture_explorer, load_fixture};
use catalens::{AdvancedFilters, Category, Explorer, ExplorerConfig, FilterCriteria};

fn search(term: &str) -> FilterCriteria {
    FilterCriteria::new().with_search(term)
}

#[test]
fn test_repeat_criteria_is_a_hit_with_identical_output() {
    let mut explorer = fixture_explorer();
    let criteria = search("meter").with_category(Category::Send);

    let first = filter_ids(&mut explorer, &criteria);
    let second = filter_ids(&mut explorer, &criteria);

    assert_eq!(first, second);
    let stats = explorer.cache_stats();
    assert_eq!((stats.misses, stats.hits, stats.len), (1, 1, 1));
}

#[test]
fn test_structurally_equal_criteria_share_an_entry() {
    let mut explorer = fixture_explorer();
    let a = FilterCriteria::new()
        .with_search("meter")
        .with_advanced(AdvancedFilters {
            min_data_items: 2,
            ..AdvancedFilters::default()
        });
    let mut b = FilterCriteria::new();
    b.advanced.min_data_items = 2;
    b.search = "meter".to_string();

    explorer.filter(&a);
    explorer.filter(&b);
    assert_eq!(explorer.cache_stats().hits, 1);
}

#[test]
fn test_fifty_first_key_evicts_the_oldest() {
    let mut explorer = fixture_explorer();
    for i in 0..51 {
        explorer.filter(&search(&format!("term{i}")));
    }

    let stats = explorer.cache_stats();
    assert_eq!(stats.len, 50);
    assert_eq!(stats.evictions, 1);

    // term50 is still cached, term0 was evicted
    explorer.filter(&search("term50"));
    assert_eq!(explorer.cache_stats().hits, 1);
    explorer.filter(&search("term0"));
    assert_eq!(explorer.cache_stats().misses, 52);
}

#[test]
fn test_hits_do_not_protect_from_eviction() {
    let config = ExplorerConfig {
        cache_capacity: 3,
        ..ExplorerConfig::default()
    };
    let mut explorer = Explorer::with_config(load_fixture(), config);

    for term in ["a", "b", "c"] {
        explorer.filter(&search(term));
    }
    explorer.filter(&search("a"));
    explorer.filter(&search("d"));
    let before = explorer.cache_stats();
    assert_eq!(before.hits, 1);

    // FIFO: "a" was inserted first, so it went first despite the recent hit
    explorer.filter(&search("a"));
    let after = explorer.cache_stats();
    assert_eq!(after.misses, before.misses + 1);
}

#[test]
fn test_favorites_only_views_see_toggles() {
    let mut explorer = fixture_explorer();
    let favorites = FilterCriteria::new().with_advanced(AdvancedFilters {
        favorites_only: true,
        ..AdvancedFilters::default()
    });

    assert!(filter_ids(&mut explorer, &favorites).is_empty());
    explorer.toggle_favorite("IF-004");
    explorer.toggle_favorite("IF-002");
    assert_eq!(filter_ids(&mut explorer, &favorites), vec!["IF-002", "IF-004"]);
}
