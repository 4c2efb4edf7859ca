//! Cache Factory
//!
//! Builds a cache backend from configuration and hands it back behind the
//! common `Cache` trait.

use tracing::info;

use crate::cache::{Cache, MemoryCache};
use crate::config::{BackendKind, Config};
use crate::error::{CacheError, Result};

/// Builds the backend selected by `config.backend`.
///
/// The memory backend is the only one compiled into this crate. Remote
/// selectors have their settings validated and are then reported as
/// unsupported.
pub fn build<V>(config: &Config) -> Result<Box<dyn Cache<V>>>
where
    V: Clone + Send + 'static,
{
    match config.backend {
        BackendKind::Memory => Ok(Box::new(build_memory::<V>(config))),
        BackendKind::RemoteKv => {
            if config.remote_addr.is_none() {
                return Err(CacheError::InvalidConfig(
                    "remote-kv backend requires an address".to_string(),
                ));
            }
            Err(CacheError::UnsupportedBackend(config.backend.to_string()))
        }
        BackendKind::RemoteObject => {
            if config.object_servers.is_empty() {
                return Err(CacheError::InvalidConfig(
                    "remote-object backend requires at least one server".to_string(),
                ));
            }
            Err(CacheError::UnsupportedBackend(config.backend.to_string()))
        }
    }
}

/// Builds the in-process engine with the configured capacity.
///
/// Unlike `build`, the concrete type is kept, so callers can reach
/// diagnostics such as `MemoryCache::stats`.
pub fn build_memory<V>(config: &Config) -> MemoryCache<V> {
    let cache = MemoryCache::new();
    if config.capacity > 0 {
        cache.set_capacity(config.capacity);
    }
    info!(capacity = config.capacity, "memory cache initialized");
    cache
}
