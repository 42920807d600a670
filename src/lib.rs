// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search, filtering and result caching for interface catalogues.
//!
//! A catalogue is a static dataset of interfaces (message exchanges between
//! parties), each composed of data items and data blocks drawn from shared
//! lookup tables. This crate answers "which interfaces match what the user is
//! looking at right now?" quickly and repeatably.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  dataset.rs │────▶│  content.rs  │────▶│  fuzzy/      │
//! │ (Interface, │     │ (searchable  │     │ (similarity, │
//! │  Catalogue) │     │  text, count)│     │  fuzzy_match)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  filter.rs (Predicate) ──▶ scoring/ranking.rs (rank) │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  session.rs (Explorer: preferences + FIFO cache)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use catalens::{Category, Dataset, Explorer, FilterCriteria};
//!
//! let dataset = Dataset::from_json_str(r#"{
//!     "interfaces": [
//!         {"id": "A", "name": "Meter Reading Request", "supplier_type": "supplier_both"},
//!         {"id": "B", "name": "Meter Reading Response", "supplier_type": "none"}
//!     ]
//! }"#).unwrap();
//!
//! let mut explorer = Explorer::new(dataset);
//! let criteria = FilterCriteria::new().with_search("meter");
//! let ids: Vec<_> = explorer.filter(&criteria).iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, ["A", "B"]);
//!
//! let send = FilterCriteria::new().with_category(Category::Send);
//! assert_eq!(explorer.filter(&send).len(), 1);
//! ```

pub mod cache;
pub mod config;
pub mod content;
pub mod criteria;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod preferences;
pub mod rejection;
pub mod scoring;
pub mod session;
pub mod suggest;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use cache::{CacheStats, ResultCache, DEFAULT_CAPACITY};
pub use config::ExplorerConfig;
pub use content::{composed_item_count, composition_view, searchable_content, ItemRow, Section};
pub use criteria::{parse_bound, AdvancedFilters, CriteriaKey, FilterCriteria, RawAdvancedFilters};
pub use dataset::{DataItemPatch, Dataset, ReferenceKind, UnresolvedReference};
pub use error::{ConfigError, DatasetError, PreferencesError};
pub use filter::{matches, Predicate};
pub use fuzzy::{edit_distance, fuzzy_match, similarity, FuzzyMatch, DEFAULT_THRESHOLD};
pub use preferences::{JsonFileStore, MemoryStore, Preferences, PreferencesStore};
pub use rejection::{rejection_codes_for, search_rejection_codes, CodeEntry};
pub use scoring::ranking::{compare_scored, rank, relevance, Scored};
pub use session::Explorer;
pub use suggest::{suggestions, SuggestOptions};
pub use types::{
    Catalogue, Category, CategoryFilter, CompositionEntry, DataBlock, DataItem, Interface,
    Obligation, RejectionCode,
};
