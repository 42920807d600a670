// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity stays in [0, 1], is symmetric, and agrees with fuzzy_match.

#![no_main]

use arbitrary::Arbitrary;
use catalens::{edit_distance, fuzzy_match, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    text: String,
    threshold: u8,
}

fuzz_target!(|input: Input| {
    // Quadratic distance; keep inputs small
    if input.query.len() > 64 || input.text.len() > 256 {
        return;
    }

    let forward = similarity(&input.query, &input.text);
    let backward = similarity(&input.text, &input.query);
    assert!((0.0..=1.0).contains(&forward), "similarity out of range: {}", forward);
    assert!((forward - backward).abs() < 1e-12, "similarity not symmetric");

    let distance = edit_distance(&input.query, &input.text);
    let longest = input.query.chars().count().max(input.text.chars().count());
    assert!(distance <= longest);

    let threshold = f64::from(input.threshold) / 255.0;
    let result = fuzzy_match(&input.query, &input.text, threshold);
    assert!((0.0..=1.0).contains(&result.score));
    if input.query.is_empty() {
        assert!(result.matches);
    }
});
