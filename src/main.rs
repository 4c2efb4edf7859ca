//! TTL LRU Cache - demo driver
//!
//! Builds a cache from the environment, walks through the basic operations
//! and then runs a concurrent load against the shared instance.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use serde::Serialize;
use tokio::signal;
use tokio::task::JoinSet;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_lru_cache::{factory, BackendKind, Cache, CacheError, Config, MemoryCache};

/// Operations each demo worker performs.
const OPS_PER_WORKER: usize = 10_000;

/// Distinct keys touched by the load, larger than the default demo capacity.
const KEY_SPACE: usize = 512;

/// Summary of the concurrent load, logged as JSON.
#[derive(Debug, Default, Serialize)]
struct LoadReport {
    workers: usize,
    operations: usize,
    hits: usize,
    misses: usize,
    elapsed_ms: u128,
}

/// Main entry point for the demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the cache through the factory
/// 4. Walk through set/get/delete/clear and TTL expiry
/// 5. Run the concurrent load until done or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_lru_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TTL LRU cache demo");

    let config = Config::from_env();
    info!(
        "Configuration loaded: backend={}, capacity={}, workers={}",
        config.backend, config.capacity, config.demo_workers
    );

    let memory: Arc<MemoryCache<String>> = match config.backend {
        BackendKind::Memory => Arc::new(factory::build_memory(&config)),
        _ => {
            // Remote selectors surface their configuration error first
            factory::build::<String>(&config).context("failed to build cache backend")?;
            anyhow::bail!("demo only drives the memory backend, got {}", config.backend);
        }
    };
    let cache: Arc<dyn Cache<String>> = memory.clone();

    walkthrough(cache.as_ref()).await?;

    tokio::select! {
        report = run_load(cache.clone(), config.demo_workers) => {
            let report = report?;
            info!("Load complete: {}", serde_json::to_string(&report)?);
        }
        _ = shutdown_signal() => {
            warn!("Load interrupted");
        }
    }

    let stats = memory.stats();
    info!(
        hit_rate = stats.hit_rate(),
        "Cache stats: {}",
        serde_json::to_string(&stats)?
    );

    info!("Demo complete");
    Ok(())
}

/// Exercises each operation once and logs the outcome.
async fn walkthrough(cache: &dyn Cache<String>) -> anyhow::Result<()> {
    cache.set("name", "John Doe".to_string())?;
    cache.set("city", "New York".to_string())?;
    info!("get name -> {}", cache.get("name")?);

    match cache.get("nonexistent") {
        Err(err) => info!("get nonexistent -> {err}"),
        Ok(value) => warn!("unexpected value for nonexistent key: {value}"),
    }

    cache.delete("city")?;
    info!("deleted city, get city -> {:?}", cache.get("city").err());

    if let Err(CacheError::EmptyKey) = cache.set("", String::new()) {
        info!("empty key rejected");
    }

    cache.set_with_ttl("session", "token".to_string(), Duration::from_millis(100))?;
    info!("get session before expiry -> {}", cache.get("session")?);
    tokio::time::sleep(Duration::from_millis(150)).await;
    info!("get session after expiry -> {:?}", cache.get("session").err());

    cache.clear()?;
    info!("cleared, get name -> {:?}", cache.get("name").err());
    Ok(())
}

/// Spawns `workers` tasks that mix reads and writes over a shared key space.
async fn run_load(cache: Arc<dyn Cache<String>>, workers: usize) -> anyhow::Result<LoadReport> {
    let started = Instant::now();
    let mut tasks = JoinSet::new();

    for worker in 0..workers.max(1) {
        let cache = cache.clone();
        tasks.spawn(async move {
            let (mut hits, mut misses) = (0usize, 0usize);
            for i in 0..OPS_PER_WORKER {
                let key = format!("key-{}", (i * 31 + worker * 7) % KEY_SPACE);
                if i % 4 == 0 {
                    cache.set(&key, format!("w{worker}-{i}"))?;
                    continue;
                }
                match cache.get(&key) {
                    Ok(_) => hits += 1,
                    Err(CacheError::KeyNotFound(_)) => misses += 1,
                    Err(err) => return Err(err),
                }
            }
            Ok::<_, CacheError>((hits, misses))
        });
    }

    let mut report = LoadReport {
        workers: workers.max(1),
        operations: workers.max(1) * OPS_PER_WORKER,
        ..LoadReport::default()
    };
    while let Some(joined) = tasks.join_next().await {
        let (hits, misses) = joined.context("load worker panicked")??;
        report.hits += hits;
        report.misses += misses;
    }
    report.elapsed_ms = started.elapsed().as_millis();
    Ok(report)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, stopping...");
        }
        _ = terminate => {
            info!("Received SIGTERM, stopping...");
        }
    }
}
