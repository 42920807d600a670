// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary form input never panics and yields a consistent snapshot.

#![no_main]

use arbitrary::Arbitrary;
use catalens::{parse_bound, AdvancedFilters, FilterCriteria, RawAdvancedFilters};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    search: String,
    min: String,
    max: String,
    json: String,
}

fuzz_target!(|input: Input| {
    // A parsed bound always comes from a digit run
    if parse_bound(&input.max).is_some() {
        assert!(input.max.chars().any(|c| c.is_ascii_digit()));
    }

    let advanced = AdvancedFilters::from(RawAdvancedFilters {
        min_data_items: input.min,
        max_data_items: input.max,
        ..RawAdvancedFilters::default()
    });
    let criteria = FilterCriteria::new()
        .with_search(input.search)
        .with_advanced(advanced);

    for term in criteria.search_terms() {
        assert!(!term.is_empty());
        assert!(!term.chars().any(char::is_whitespace));
    }
    if let Some(term) = criteria.ranking_term() {
        assert!(!term.is_empty());
    }

    // Equal criteria give equal keys
    assert_eq!(criteria.cache_key(0), criteria.clone().cache_key(0));

    // Untrusted JSON must fail cleanly
    let _ = serde_json::from_str::<FilterCriteria>(&input.json);
});
