// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session tuning knobs. Every field has a default, so an empty JSON object
//! is a valid config file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cache::DEFAULT_CAPACITY;
use crate::error::ConfigError;
use crate::fuzzy::DEFAULT_THRESHOLD;
use crate::preferences::DEFAULT_RECENT_LIMIT;

/// Suggestions returned for one query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Shortest query (in chars) that produces suggestions.
pub const DEFAULT_SUGGESTION_MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplorerConfig {
    pub cache_capacity: usize,
    pub fuzzy_threshold: f64,
    pub recent_limit: usize,
    pub suggestion_limit: usize,
    pub suggestion_min_query_len: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            fuzzy_threshold: DEFAULT_THRESHOLD,
            recent_limit: DEFAULT_RECENT_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            suggestion_min_query_len: DEFAULT_SUGGESTION_MIN_QUERY_LEN,
        }
    }
}

impl ExplorerConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ExplorerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::Invalid(
                "cacheCapacity must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::Invalid(format!(
                "fuzzyThreshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        Ok(())
    }
}
