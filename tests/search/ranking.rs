//! Relevance ordering of filtered results.

use super::common::{filter_ids, fixture_explorer, load_fixture};
use catalens::{relevance, Category, FilterCriteria};

/// Relevance of each returned id to the criteria's whole search term.
fn scores(ids: &[String], criteria: &FilterCriteria) -> Vec<f64> {
    let dataset = load_fixture();
    let term = criteria.ranking_term().expect("search term");
    ids.iter()
        .map(|id| relevance(&term, dataset.record(id).unwrap(), dataset.catalogue()))
        .collect()
}

#[test]
fn test_no_search_keeps_dataset_order() {
    let criteria = FilterCriteria::new().with_category(Category::Send);
    let ids = filter_ids(&mut fixture_explorer(), &criteria);
    assert_eq!(ids, vec!["IF-001", "IF-003", "IF-005"]);
}

#[test]
fn test_whole_term_substring_ranks_first() {
    let criteria = FilterCriteria::new().with_search("meter reading response");
    let ids = filter_ids(&mut fixture_explorer(), &criteria);

    assert_eq!(ids.first().map(String::as_str), Some("IF-002"));
    assert_eq!(scores(&ids, &criteria)[0], 1.0);
    assert_eq!(ids, vec!["IF-002", "IF-006", "IF-004", "IF-001", "IF-003"]);
}

#[test]
fn test_scores_are_non_increasing() {
    for query in ["meter reading zzz", "granularity unmetered", "supplier status"] {
        let criteria = FilterCriteria::new().with_search(query);
        let ids = filter_ids(&mut fixture_explorer(), &criteria);
        let scores = scores(&ids, &criteria);

        for pair in scores.windows(2) {
            assert!(
                pair[0] >= pair[1],
                "{:?}: scores out of order {:?}",
                query,
                scores
            );
        }
    }
}

#[test]
fn test_equal_scores_keep_dataset_order() {
    // Every hit contains "mpan core" verbatim, so every score is 1
    let criteria = FilterCriteria::new().with_search("MPAN Core");
    let ids = filter_ids(&mut fixture_explorer(), &criteria);

    assert_eq!(ids, vec!["IF-001", "IF-002", "IF-003", "IF-004"]);
    assert!(scores(&ids, &criteria).iter().all(|&s| s == 1.0));
}

#[test]
fn test_ranking_uses_whole_term_not_best_term() {
    // "unmetered" alone is a substring of IF-006; the whole term is not a
    // substring anywhere, so no record gets a perfect score
    let criteria = FilterCriteria::new().with_search("granularity unmetered");
    let ids = filter_ids(&mut fixture_explorer(), &criteria);

    assert!(scores(&ids, &criteria).iter().all(|&s| s < 1.0));
    assert_eq!(ids, vec!["IF-006", "IF-005"]);
}
