// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two layers here: a plain Levenshtein distance, and the normalized
//! similarity score built on top of it that the filter and ranking stages use.

mod levenshtein;
mod matching;

pub use levenshtein::*;
pub use matching::*;
