//! Shared test utilities and fixtures.

#![allow(dead_code)]

use catalens::{Dataset, Explorer, FilterCriteria, Interface};

// Re-export canonical test utilities from catalens::testing
pub use catalens::testing::{
    make_block, make_catalogue, make_interface, make_item, sample_dataset,
};

/// The checked-in fixture catalogue.
pub const FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/fixtures/catalogue.json"
);

/// Load the fixture catalogue, panicking with context on failure.
pub fn load_fixture() -> Dataset {
    Dataset::from_path(FIXTURE_PATH)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", FIXTURE_PATH, e))
}

/// A fresh session over the fixture catalogue.
pub fn fixture_explorer() -> Explorer {
    Explorer::new(load_fixture())
}

/// Ids of the records `explorer` returns for `criteria`, in order.
pub fn filter_ids(explorer: &mut Explorer, criteria: &FilterCriteria) -> Vec<String> {
    ids(&explorer.filter(criteria))
}

pub fn ids(records: &[&Interface]) -> Vec<String> {
    records.iter().map(|record| record.id.clone()).collect()
}
