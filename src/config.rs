//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

// == Backend Kind ==
/// Which cache backend the factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// In-process LRU engine
    #[default]
    Memory,
    /// Networked key/value store
    RemoteKv,
    /// Distributed memory-object cache
    RemoteObject,
}

impl FromStr for BackendKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(BackendKind::Memory),
            "remote-kv" | "redis" => Ok(BackendKind::RemoteKv),
            "remote-object" | "memcached" => Ok(BackendKind::RemoteObject),
            other => Err(CacheError::UnsupportedBackend(other.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Memory => "memory",
            BackendKind::RemoteKv => "remote-kv",
            BackendKind::RemoteObject => "remote-object",
        };
        f.write_str(name)
    }
}

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Selected backend
    pub backend: BackendKind,
    /// Initial capacity of the memory backend, 0 = unbounded
    pub capacity: usize,
    /// Address of the remote key/value store
    pub remote_addr: Option<String>,
    /// Password for the remote key/value store
    pub remote_password: Option<String>,
    /// Logical database index on the remote key/value store
    pub remote_db: u32,
    /// Servers of the memory-object cache
    pub object_servers: Vec<String>,
    /// Concurrent workers used by the demo load
    pub demo_workers: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_BACKEND` - `memory`, `remote-kv` or `remote-object` (default: memory)
    /// - `CACHE_CAPACITY` - Maximum cache entries, 0 = unbounded (default: 0)
    /// - `CACHE_REMOTE_ADDR` - Remote key/value store address
    /// - `CACHE_REMOTE_PASSWORD` - Remote key/value store password
    /// - `CACHE_REMOTE_DB` - Remote key/value store database (default: 0)
    /// - `CACHE_OBJECT_SERVERS` - Comma-separated memory-object cache servers
    /// - `DEMO_WORKERS` - Concurrent demo workers (default: 4)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: parse_var("CACHE_BACKEND").unwrap_or(defaults.backend),
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.capacity),
            remote_addr: non_empty_var("CACHE_REMOTE_ADDR"),
            remote_password: non_empty_var("CACHE_REMOTE_PASSWORD"),
            remote_db: parse_var("CACHE_REMOTE_DB").unwrap_or(defaults.remote_db),
            object_servers: non_empty_var("CACHE_OBJECT_SERVERS")
                .map(|v| split_list(&v))
                .unwrap_or_default(),
            demo_workers: parse_var("DEMO_WORKERS").unwrap_or(defaults.demo_workers),
        }
    }

    /// Config for an in-memory cache with the given capacity.
    pub fn memory(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Memory,
            capacity: 0,
            remote_addr: None,
            remote_password: None,
            remote_db: 0,
            object_servers: Vec::new(),
            demo_workers: 4,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
