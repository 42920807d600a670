// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filtering the sample dataset with arbitrary queries.

#![no_main]

use arbitrary::Arbitrary;
use catalens::testing::sample_dataset;
use catalens::{Category, Explorer, FilterCriteria};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    search: String,
    category: u8,
}

fuzz_target!(|input: Input| {
    if input.search.len() > 128 {
        return;
    }

    let dataset = sample_dataset();
    let total = dataset.len();
    let mut explorer = Explorer::new(dataset);

    let mut criteria = FilterCriteria::new().with_search(input.search);
    if let Some(category) = Category::ALL.get(usize::from(input.category) % 5) {
        criteria = criteria.with_category(*category);
    }

    let first: Vec<String> = explorer.filter(&criteria).iter().map(|r| r.id.clone()).collect();
    assert!(first.len() <= total);

    // Cached replay is identical
    let second: Vec<String> = explorer.filter(&criteria).iter().map(|r| r.id.clone()).collect();
    assert_eq!(first, second);
});
