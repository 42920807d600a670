// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Classic edit distance: insert, delete and substitute, all at unit cost.
//!
//! Works on Unicode scalar values, not bytes, so `"café"` and `"cafe"` are one
//! substitution apart rather than two. Only two DP rows are kept alive, sized by
//! the shorter string. Queries are short and catalogue blobs are long, so the
//! row stays small even when the text runs to thousands of characters.

/// Number of single-character edits needed to turn `a` into `b`.
///
/// Symmetric, zero only for equal strings, and bounded above by the longer
/// string's length. Quadratic time, linear space in the shorter input.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Keep the DP row over the shorter string
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut dp: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = if lc == sc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[short.len()]
}
