//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction.

mod clock;
mod contract;
mod entry;
mod lru;
mod memory;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use contract::Cache;
pub use entry::CacheEntry;
pub use lru::RecencyList;
pub use memory::MemoryCache;
pub use stats::CacheStats;
pub use store::{CacheStore, Lookup};
