// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: relevance order when searching, dataset order otherwise.
//!
//! Scores are computed once per record (not once per comparison) and the sort
//! is stable, so equal scores keep their relative dataset order. The term is
//! the search box text as typed, lower-cased; only a blank box skips ranking.

use std::cmp::Ordering;

use crate::content::searchable_content;
use crate::criteria::FilterCriteria;
use crate::fuzzy::fuzzy_match_folded;
use crate::types::{Catalogue, Interface};

/// A record index paired with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub index: usize,
    pub score: f64,
}

/// Relevance of `record` to an already lower-cased search term.
///
/// Substring hits score 1; everything else scores its normalized similarity.
pub fn relevance(term: &str, record: &Interface, catalogue: &Catalogue) -> f64 {
    // The threshold only decides `matches`, which ranking ignores
    fuzzy_match_folded(term, &searchable_content(record, catalogue), 0.0).score
}

/// Compare two scored results for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Index** - ascending, so ties fall back to dataset order
pub fn compare_scored(a: &Scored, b: &Scored) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.index.cmp(&b.index),
    }
}

/// Order filtered record indices for display.
///
/// With no search term the indices come back unchanged and nothing is scored.
/// Otherwise they are sorted by [`compare_scored`] against the whole term.
pub fn rank(
    selected: Vec<usize>,
    records: &[Interface],
    criteria: &FilterCriteria,
    catalogue: &Catalogue,
) -> Vec<usize> {
    let Some(term) = criteria.ranking_term() else {
        return selected;
    };

    let mut scored: Vec<Scored> = selected
        .into_iter()
        .map(|index| Scored {
            index,
            score: relevance(&term, &records[index], catalogue),
        })
        .collect();
    scored.sort_by(compare_scored);
    scored.into_iter().map(|s| s.index).collect()
}
