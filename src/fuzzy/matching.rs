// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized similarity and the substring-or-similarity match test.
//!
//! `similarity` maps edit distance onto `[0, 1]`:
//!
//! ```text
//! score = 1 - distance / max(len(a), len(b))      (1 when both are empty)
//! ```
//!
//! `fuzzy_match` short-circuits on a literal substring hit, which always scores
//! a perfect 1. Only when the query is not contained in the text does the edit
//! distance get computed.
//!
//! Both functions case-fold their inputs first.

use serde::{Deserialize, Serialize};

use super::edit_distance;

/// Membership threshold the filter stage uses for each search term.
///
/// Low on purpose: a short query term is compared against a long flattened
/// content blob, so the raw similarity of a near-miss is small.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Outcome of [`fuzzy_match`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub matches: bool,
    pub score: f64,
}

impl FuzzyMatch {
    /// The result of a literal substring hit.
    pub const PERFECT: FuzzyMatch = FuzzyMatch {
        matches: true,
        score: 1.0,
    };
}

/// Case-insensitive normalized similarity in `[0, 1]`.
///
/// Symmetric, and `similarity(a, a) == 1` for every `a`.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_folded(&a.to_lowercase(), &b.to_lowercase())
}

/// `similarity` for inputs that are already lower-cased.
pub(crate) fn similarity_folded(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (edit_distance(a, b) as f64 / max_len as f64)
}

/// Does `query` fuzzily occur in `text`?
///
/// A literal substring (after case folding) is always `{ matches: true, score: 1 }`,
/// whatever the threshold. Otherwise the score is `similarity(query, text)` and
/// the match holds when it reaches `threshold`.
pub fn fuzzy_match(query: &str, text: &str, threshold: f64) -> FuzzyMatch {
    fuzzy_match_folded(&query.to_lowercase(), &text.to_lowercase(), threshold)
}

/// `fuzzy_match` for inputs that are already lower-cased.
///
/// The filter stage builds its content blob lower-cased once, so this skips a
/// second fold of a potentially long string per term.
pub(crate) fn fuzzy_match_folded(query: &str, text: &str, threshold: f64) -> FuzzyMatch {
    if text.contains(query) {
        return FuzzyMatch::PERFECT;
    }

    let score = similarity_folded(query, text);
    FuzzyMatch {
        matches: score >= threshold,
        score,
    }
}
