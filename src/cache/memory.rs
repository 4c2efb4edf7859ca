//! Memory Cache Module
//!
//! Thread-safe in-process cache engine: a `CacheStore` behind a single
//! exclusive lock, paired with a clock.

use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{Cache, CacheStats, CacheStore, Clock, SystemClock};
use crate::error::Result;

// == Memory Cache ==
/// In-process LRU cache with lazy TTL expiration.
///
/// Every operation holds the lock for its whole duration. Reads take the
/// exclusive lock too, since a hit reorders recency and a lapsed entry is
/// purged on the spot.
///
/// # Example
/// ```
/// use ttl_lru_cache::{Cache, MemoryCache};
///
/// let cache = MemoryCache::with_capacity(2);
/// cache.set("a", 1).unwrap();
/// cache.set("b", 2).unwrap();
/// cache.set("c", 3).unwrap();
///
/// assert!(cache.get("a").is_err());
/// assert_eq!(cache.get("c").unwrap(), 3);
/// ```
#[derive(Debug)]
pub struct MemoryCache<V, C = SystemClock> {
    store: Mutex<CacheStore<V>>,
    clock: C,
}

impl<V> MemoryCache<V, SystemClock> {
    // == Constructors ==
    /// Creates an unbounded cache on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a cache bounded to `capacity` entries (0 = unbounded).
    pub fn with_capacity(capacity: usize) -> Self {
        let cache = Self::new();
        cache.set_capacity(capacity);
        cache
    }
}

impl<V> Default for MemoryCache<V, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Clock> MemoryCache<V, C> {
    /// Creates an unbounded cache reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: Mutex::new(CacheStore::new(0)),
            clock,
        }
    }

    // == Set Capacity ==
    /// Sets the entry bound (0 = unbounded), evicting immediately if the
    /// cache already holds more.
    pub fn set_capacity(&self, capacity: usize) {
        let mut store = self.store.lock();
        let before = store.len();
        store.set_capacity(capacity);
        debug!(capacity, evicted = before - store.len(), "cache capacity changed");
    }

    pub fn capacity(&self) -> usize {
        self.store.lock().capacity()
    }

    /// Number of entries held, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Physical presence, without checking expiry or touching recency.
    pub fn contains(&self, key: &str) -> bool {
        self.store.lock().contains(key)
    }

    /// Keys from most to least recently touched.
    pub fn keys(&self) -> Vec<String> {
        self.store.lock().keys()
    }

    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }
}

impl<V, C> Cache<V> for MemoryCache<V, C>
where
    V: Clone + Send,
    C: Clock,
{
    fn set_with_ttl(&self, key: &str, value: V, ttl: Duration) -> Result<()> {
        let mut store = self.store.lock();
        store.set(key, value, ttl, self.clock.now())
    }

    fn get(&self, key: &str) -> Result<V> {
        let mut store = self.store.lock();
        store.get(key, self.clock.now()).map(V::clone)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.store.lock().delete(key)
    }

    fn clear(&self) -> Result<()> {
        self.store.lock().clear();
        Ok(())
    }
}
