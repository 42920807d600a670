// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rejection-code lookups: per record, and across the whole catalogue.

use serde::Serialize;

use crate::types::{Catalogue, Interface, RejectionCode};

/// A rejection code together with its catalogue id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeEntry<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub code: &'a RejectionCode,
}

/// The codes `record` lists, in its order. Unknown ids are skipped.
pub fn rejection_codes_for<'a>(
    record: &'a Interface,
    catalogue: &'a Catalogue,
) -> Vec<CodeEntry<'a>> {
    record
        .rejection_code_ids
        .iter()
        .filter_map(|id| {
            catalogue
                .rejection_code(id)
                .map(|code| CodeEntry { id, code })
        })
        .collect()
}

/// Catalogue codes whose id, description, reason or resolution contain
/// `query`, ignoring case. Ordered by id. A blank query returns every code.
pub fn search_rejection_codes<'a>(query: &str, catalogue: &'a Catalogue) -> Vec<CodeEntry<'a>> {
    let needle = query.trim().to_lowercase();

    catalogue
        .rejection_codes
        .iter()
        .filter(|(id, code)| needle.is_empty() || code_contains(id, code, &needle))
        .map(|(id, code)| CodeEntry { id, code })
        .collect()
}

fn code_contains(id: &str, code: &RejectionCode, needle: &str) -> bool {
    let fields = [
        Some(id),
        Some(code.description.as_str()),
        code.reason.as_deref(),
        code.resolution.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}
