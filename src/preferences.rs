// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-user state: favorites and the recently viewed list.
//!
//! Preferences outlive a session, so they sit behind a [`PreferencesStore`].
//! The filter stage only reads the favorites set; everything else here is
//! bookkeeping for front ends.
//!
//! `revision` changes whenever the favorites set changes. The session folds it
//! into the cache key of favorites-only views, which is how a toggle becomes
//! visible without flushing unrelated cache entries.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PreferencesError;

/// How many recently viewed ids are remembered.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

/// Favorites set plus most-recent-first view history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    favorites: BTreeSet<String>,
    #[serde(default, rename = "recent")]
    recently_viewed: VecDeque<String>,
    #[serde(skip)]
    revision: u64,
    #[serde(skip, default = "default_recent_limit")]
    recent_limit: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            favorites: BTreeSet::new(),
            recently_viewed: VecDeque::new(),
            revision: 0,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change how many recently viewed ids are kept, trimming if needed.
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self.normalize();
        self
    }

    /// Flip `id`'s favorite state. Returns the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        self.revision += 1;
        now_favorite
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorite ids in ascending order.
    pub fn favorites(&self) -> impl Iterator<Item = &str> {
        self.favorites.iter().map(String::as_str)
    }

    /// Move `id` to the front of the history, dropping any older occurrence
    /// and anything past the limit.
    pub fn record_view(&mut self, id: &str) {
        self.recently_viewed.retain(|seen| seen != id);
        self.recently_viewed.push_front(id.to_string());
        self.recently_viewed.truncate(self.recent_limit);
    }

    /// Recently viewed ids, most recent first.
    pub fn recently_viewed(&self) -> impl Iterator<Item = &str> {
        self.recently_viewed.iter().map(String::as_str)
    }

    /// Bumped on every favorites change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Continue numbering after `previous`, so a replacement set never reuses
    /// a revision the cache has already seen.
    pub(crate) fn supersede(&mut self, previous: u64) {
        self.revision = previous + 1;
    }

    /// Restore the history invariants after deserializing untrusted data:
    /// no duplicates (first occurrence wins) and at most `recent_limit` ids.
    fn normalize(&mut self) {
        let mut seen = BTreeSet::new();
        self.recently_viewed.retain(|id| seen.insert(id.clone()));
        self.recently_viewed.truncate(self.recent_limit);
    }
}

// =============================================================================
// STORES
// =============================================================================

/// Where preferences live between sessions.
pub trait PreferencesStore {
    fn load(&self) -> Result<Preferences, PreferencesError>;
    fn save(&mut self, preferences: &Preferences) -> Result<(), PreferencesError>;
}

/// Preferences kept as a small JSON file.
///
/// A missing file reads as empty preferences.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    recent_limit: usize,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, falling back to empty preferences when the file is unreadable.
    ///
    /// Corrupt preferences should never keep the catalogue from opening.
    pub fn load_or_default(&self) -> Preferences {
        self.load().unwrap_or_else(|error| {
            tracing::warn!(path = %self.path.display(), %error, "could not load preferences");
            Preferences::new().with_recent_limit(self.recent_limit)
        })
    }

    fn io_error(&self, source: io::Error) -> PreferencesError {
        PreferencesError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferencesStore for JsonFileStore {
    fn load(&self) -> Result<Preferences, PreferencesError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(Preferences::new().with_recent_limit(self.recent_limit));
            }
            Err(error) => return Err(self.io_error(error)),
        };

        let preferences: Preferences =
            serde_json::from_str(&content).map_err(|source| PreferencesError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(preferences.with_recent_limit(self.recent_limit))
    }

    fn save(&mut self, preferences: &Preferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(preferences).map_err(|source| {
            PreferencesError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

/// In-process store, for tests and embedders that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Preferences>,
}

impl PreferencesStore for MemoryStore {
    fn load(&self) -> Result<Preferences, PreferencesError> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, preferences: &Preferences) -> Result<(), PreferencesError> {
        self.saved = Some(preferences.clone());
        Ok(())
    }
}
