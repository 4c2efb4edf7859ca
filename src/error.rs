//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for every cache backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The caller supplied an empty key
    #[error("key is empty")]
    EmptyKey,

    /// No live entry for the key (missing, evicted or expired)
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The requested backend is unknown or not built into this crate
    #[error("unsupported backend: {0}")]
    UnsupportedBackend(String),

    /// Backend configuration is incomplete or malformed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CacheError {
    /// Returns true for a cache miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::KeyNotFound(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
