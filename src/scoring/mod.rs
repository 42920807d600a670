// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how filtered results get their order.
//!
//! There is one signal, the similarity of the whole search term to a record's
//! searchable content. A literal substring hit scores a perfect 1, so every
//! record that contains the term ties at the top and keeps dataset order.

pub mod ranking;
