//! Cache Store Module
//!
//! Cache engine state combining a hash index with the LRU recency list.
//! The store is not synchronized; `MemoryCache` owns it behind one lock and
//! passes in the current instant.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::cache::{CacheEntry, CacheStats, RecencyList};
use crate::error::{CacheError, Result};

// == Lookup Outcome ==
/// Result of reading a key, before it is mapped onto the public errors.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<V> {
    /// Live entry, already moved to the front
    Hit(V),
    /// No entry for the key
    Missing,
    /// Entry had lapsed and was purged
    Expired,
}

// == Cache Store ==
/// Cache storage with LRU eviction and lazy TTL expiration.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Entries ordered from most to least recently touched
    entries: RecencyList<CacheEntry<V>>,
    /// Key to slot handle in `entries`
    index: HashMap<String, usize>,
    /// Maximum number of entries, 0 = unbounded
    capacity: usize,
    /// Performance statistics
    stats: CacheStats,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity (0 = unbounded).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RecencyList::new(),
            index: HashMap::new(),
            capacity,
            stats: CacheStats::new(),
        }
    }

    // == Set Capacity ==
    /// Changes the capacity, evicting from the back if the new bound is
    /// below the current entry count.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.evict();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Set ==
    /// Stores a key-value pair with a TTL (zero = never expires).
    ///
    /// An existing key, expired or not, is overwritten in place and moved to
    /// the front. A new key is pushed to the front and may evict others.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Time to live from `now`
    /// * `now` - The instant of the write
    pub fn set(&mut self, key: &str, value: V, ttl: Duration, now: Instant) -> Result<()> {
        validate_key(key)?;

        if let Some(&idx) = self.index.get(key) {
            if let Some(entry) = self.entries.get_mut(idx) {
                entry.replace(value, ttl, now);
            }
            self.entries.move_to_front(idx);
            return Ok(());
        }

        let idx = self
            .entries
            .push_front(CacheEntry::new(key.to_string(), value, ttl, now));
        self.index.insert(key.to_string(), idx);
        self.evict();

        Ok(())
    }

    // == Lookup ==
    /// Reads a key, purging it if its TTL has lapsed.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    /// * `now` - The instant used to evaluate expiry
    pub fn lookup(&mut self, key: &str, now: Instant) -> Result<Lookup<&V>> {
        validate_key(key)?;

        let Some(&idx) = self.index.get(key) else {
            self.stats.record_miss();
            return Ok(Lookup::Missing);
        };

        let expired = self
            .entries
            .get(idx)
            .map_or(true, |entry| entry.is_expired(now));
        if expired {
            self.entries.remove(idx);
            self.index.remove(key);
            self.stats.record_expiration();
            return Ok(Lookup::Expired);
        }

        self.stats.record_hit();
        self.entries.move_to_front(idx);
        match self.entries.get(idx) {
            Some(entry) => Ok(Lookup::Hit(&entry.value)),
            None => Ok(Lookup::Missing),
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A lapsed entry is removed and reported as `KeyNotFound`, the same as
    /// a key that was never stored.
    pub fn get(&mut self, key: &str, now: Instant) -> Result<&V> {
        match self.lookup(key, now)? {
            Lookup::Hit(value) => Ok(value),
            Lookup::Missing | Lookup::Expired => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }

    // == Delete ==
    /// Removes an entry by key, whether or not it has expired.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;

        match self.index.remove(key) {
            Some(idx) => {
                self.entries.remove(idx);
                Ok(())
            }
            None => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    // == Contains ==
    /// Checks physical presence without evaluating expiry or touching recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Keys ==
    /// Returns keys from most to least recently touched.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats.capacity = self.capacity;
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn index_len(&self) -> usize {
        self.index.len()
    }

    // == Evict ==
    /// Drops entries from the back until the capacity holds.
    ///
    /// Eviction is purely by recency: an expired entry nearer the front
    /// outlives a live one at the back.
    fn evict(&mut self) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() > self.capacity {
            let Some(entry) = self.entries.pop_back() else {
                break;
            };
            self.index.remove(&entry.key);
            self.stats.record_eviction();
            trace!(key = %entry.key, "evicted least recently used entry");
        }
    }
}

/// Rejects the empty key before any state is inspected.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        Err(CacheError::EmptyKey)
    } else {
        Ok(())
    }
}
