//! TTL LRU Cache - A process-local key/value cache
//!
//! Bounds memory through least-recently-used eviction and supports
//! per-entry time-to-live with lazy, read-triggered expiration.

pub mod cache;
pub mod config;
pub mod error;
pub mod factory;

pub use cache::{Cache, CacheStats, Clock, ManualClock, MemoryCache, SystemClock};
pub use config::{BackendKind, Config};
pub use error::{CacheError, Result};
