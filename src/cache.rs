// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded memo of filter results, evicted strictly first-in first-out.
//!
//! Lookups never refresh an entry's position: the oldest *inserted* key goes
//! first once the bound is exceeded, however recently it was read. There is no
//! other invalidation. The dataset is immutable for the session, so an entry
//! can only go stale through outside state that is already part of its key.
//!
//! **Invariant**: `len() <= capacity()` after every public call, and `order`
//! holds exactly the keys of `entries`, oldest first.

use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Entries kept before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 50;

/// Counters for observing cache behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
}

/// FIFO-bounded map from criteria key to computed result.
#[derive(Debug, Clone)]
pub struct ResultCache<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<K, V> Default for ResultCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K, V> ResultCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// A cache holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity + 1),
            order: VecDeque::with_capacity(capacity + 1),
            capacity,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// A hit returns the stored value untouched. A miss runs `compute`, inserts
    /// the result as the newest entry, then evicts the oldest entry if the
    /// bound is exceeded.
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        if self.entries.contains_key(&key) {
            self.hits += 1;
            tracing::debug!(key_count = self.entries.len(), "result cache hit");
        } else {
            self.misses += 1;
            let value = compute();
            let evicted = self.insert(key.clone(), value).unwrap_or(0);
            tracing::debug!(key_count = self.entries.len(), evicted, "result cache miss");
        }
        &self.entries[&key]
    }

    /// Store `value` under `key` and return how many entries were evicted.
    ///
    /// Re-inserting an existing key replaces the value, keeps the key's
    /// original position in the eviction order, and returns `None`.
    pub fn insert(&mut self, key: K, value: V) -> Option<u64> {
        if self.entries.insert(key.clone(), value).is_some() {
            return None;
        }
        self.order.push_back(key);

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    evicted += 1;
                }
                None => break,
            }
        }
        self.evictions += evicted;
        Some(evicted)
    }

    /// Peek without touching the counters.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            len: self.entries.len(),
        }
    }
}
