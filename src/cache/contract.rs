//! Cache Contract Module
//!
//! The operation set every cache backend implements.

use std::time::Duration;

use crate::error::Result;

// == Cache Trait ==
/// Backend-agnostic key/value cache.
///
/// Callers depend on this trait; `factory::build` is the only place that
/// picks a concrete backend. Every backend reports an empty key as
/// `CacheError::EmptyKey` and a miss, including a lapsed TTL, as
/// `CacheError::KeyNotFound`.
pub trait Cache<V>: Send + Sync {
    /// Stores `value` under `key` with no expiration.
    fn set(&self, key: &str, value: V) -> Result<()> {
        self.set_with_ttl(key, value, Duration::ZERO)
    }

    /// Stores `value` under `key`, expiring after `ttl` (zero = never).
    fn set_with_ttl(&self, key: &str, value: V, ttl: Duration) -> Result<()>;

    /// Returns the live value for `key`.
    fn get(&self, key: &str) -> Result<V>;

    /// Removes `key`.
    fn delete(&self, key: &str) -> Result<()>;

    /// Removes every entry.
    fn clear(&self) -> Result<()>;
}
