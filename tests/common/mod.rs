//! Conformance Suite
//!
//! Black-box scenarios any `Cache` implementation must pass. A backend is
//! plugged in through a setup function returning a fresh instance and,
//! optionally, a way to advance its time source. Without one the suite
//! sleeps for real.

#![allow(dead_code)]

use std::time::Duration;

use ttl_lru_cache::{Cache, CacheError};

/// Moves the backend's notion of time forward.
pub type Advance = Box<dyn Fn(Duration)>;

/// Produces a fresh backend for one scenario.
pub type Setup<'a> = &'a dyn Fn() -> (Box<dyn Cache<String>>, Option<Advance>);

/// Runs every scenario, each against a fresh instance.
pub fn run_suite(setup: Setup<'_>) {
    let scenarios: [(&str, fn(&dyn Cache<String>, &dyn Fn(Duration))); 6] = [
        ("set_get", |c, _| set_get(c)),
        ("delete", |c, _| delete(c)),
        ("ttl", ttl),
        ("ttl_overwrite", ttl_overwrite),
        ("clear", |c, _| clear(c)),
        ("empty_key", |c, _| empty_key(c)),
    ];

    for (name, scenario) in scenarios {
        let (cache, advance) = setup();
        let advance = advance.unwrap_or_else(|| Box::new(std::thread::sleep));
        eprintln!("conformance: {name}");
        scenario(cache.as_ref(), advance.as_ref());
    }
}

fn not_found(key: &str) -> Result<String, CacheError> {
    Err(CacheError::KeyNotFound(key.to_string()))
}

fn set_get(c: &dyn Cache<String>) {
    assert_eq!(c.get("non-existent"), not_found("non-existent"));

    c.set("key1", "value1".to_string()).expect("set failed");
    assert_eq!(c.get("key1").as_deref(), Ok("value1"));

    c.set("key1", "value2".to_string()).expect("overwrite failed");
    assert_eq!(c.get("key1").as_deref(), Ok("value2"));
}

fn delete(c: &dyn Cache<String>) {
    assert_eq!(
        c.delete("non-existent"),
        Err(CacheError::KeyNotFound("non-existent".to_string()))
    );

    c.set("key-delete", "val".to_string()).expect("set failed");
    assert_eq!(c.delete("key-delete"), Ok(()));
    assert_eq!(c.get("key-delete"), not_found("key-delete"));

    // Repeated misses leave nothing behind
    assert!(c.delete("key-delete").is_err());
    assert!(c.delete("key-delete").is_err());
}

fn ttl(c: &dyn Cache<String>, advance: &dyn Fn(Duration)) {
    let ttl = Duration::from_secs(1);
    c.set_with_ttl("key-ttl", "val".to_string(), ttl)
        .expect("set_with_ttl failed");
    assert_eq!(c.get("key-ttl").as_deref(), Ok("val"));

    advance(2 * ttl);

    assert_eq!(c.get("key-ttl"), not_found("key-ttl"));
}

fn ttl_overwrite(c: &dyn Cache<String>, advance: &dyn Fn(Duration)) {
    c.set_with_ttl("key", "val1".to_string(), Duration::from_secs(1))
        .expect("set_with_ttl failed");
    c.set_with_ttl("key", "val2".to_string(), Duration::from_secs(3))
        .expect("set_with_ttl overwrite failed");

    advance(Duration::from_millis(1500));
    assert_eq!(c.get("key").as_deref(), Ok("val2"));

    advance(Duration::from_millis(2000));
    assert_eq!(c.get("key"), not_found("key"));
}

fn clear(c: &dyn Cache<String>) {
    c.set("k1", "v1".to_string()).expect("set failed");
    c.set("k2", "v2".to_string()).expect("set failed");

    assert_eq!(c.clear(), Ok(()));

    assert_eq!(c.get("k1"), not_found("k1"));
    assert_eq!(c.get("k2"), not_found("k2"));
}

fn empty_key(c: &dyn Cache<String>) {
    c.set("present", "v".to_string()).expect("set failed");

    assert_eq!(c.set("", "val".to_string()), Err(CacheError::EmptyKey));
    assert_eq!(
        c.set_with_ttl("", "val".to_string(), Duration::from_secs(1)),
        Err(CacheError::EmptyKey)
    );
    assert_eq!(c.get(""), Err(CacheError::EmptyKey));
    assert_eq!(c.delete(""), Err(CacheError::EmptyKey));

    assert_eq!(c.get("present").as_deref(), Ok("v"));
}
