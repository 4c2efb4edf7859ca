//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with its key, value and expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Owning key, kept so eviction from the back can clear the index
    pub key: String,
    /// The stored value
    pub value: V,
    /// Expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `key` - The owning key
    /// * `value` - The value to store
    /// * `ttl` - Time to live measured from `now`; zero means no expiration
    /// * `now` - The instant the write happens
    pub fn new(key: String, value: V, ttl: Duration, now: Instant) -> Self {
        Self {
            key,
            value,
            expires_at: expiry_from(now, ttl),
        }
    }

    // == Replace ==
    /// Overwrites value and expiry in place.
    pub fn replace(&mut self, value: V, ttl: Duration, now: Instant) {
        self.value = value;
        self.expires_at = expiry_from(now, ttl);
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired once `now` reaches its expiration instant, so a
    /// TTL that has fully elapsed never yields a hit.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

/// Computes the expiry instant for a TTL, None for a zero TTL.
pub fn expiry_from(now: Instant, ttl: Duration) -> Option<Instant> {
    if ttl.is_zero() {
        None
    } else {
        now.checked_add(ttl)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("k".to_string(), "test_value", Duration::ZERO, now);

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired(now + Duration::from_secs(3600)));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("k".to_string(), 1, Duration::from_secs(60), now);

        assert_eq!(entry.expires_at, Some(now + Duration::from_secs(60)));
        assert!(!entry.is_expired(now));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new("k".to_string(), 1, Duration::from_millis(50), now);

        assert!(!entry.is_expired(now + Duration::from_millis(49)));
        assert!(entry.is_expired(now + Duration::from_millis(50)), "Entry should be expired at boundary");
    }

    #[test]
    fn test_replace_resets_expiry() {
        let now = Instant::now();
        let mut entry = CacheEntry::new("k".to_string(), 1, Duration::from_secs(1), now);

        entry.replace(2, Duration::ZERO, now);

        assert_eq!(entry.value, 2);
        assert!(entry.expires_at.is_none());
    }
}
