//! Short-TTL response cache.
//!
//! Keyed by result kind (`carry_data`, `chart_data`), holding fully shaped
//! response bodies. The cache is owned by the request layer and injected via
//! application state; the gateway and engine below it stay stateless and
//! reentrant. Entries are value snapshots: `get` clones, `put` replaces.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;

/// Concurrent response cache with per-read freshness checks.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: DashMap<String, (Value, Instant)>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key` if it is younger than `max_age`.
    /// Stale entries are evicted on read.
    pub fn get(&self, key: &str, max_age: Duration) -> Option<Value> {
        let fresh = match self.entries.get(key) {
            Some(entry) if entry.1.elapsed() < max_age => Some(entry.0.clone()),
            Some(_) => None,
            None => return None,
        };
        if fresh.is_none() {
            self.entries.remove(key);
        }
        fresh
    }

    /// Store a value under `key`, stamped now.
    pub fn put(&self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), (value, Instant::now()));
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_entries_are_returned() {
        let cache = ResponseCache::new();
        cache.put("carry_data", json!({"rows": 3}));
        assert_eq!(
            cache.get("carry_data", Duration::from_secs(30)),
            Some(json!({"rows": 3}))
        );
    }

    #[test]
    fn stale_entries_are_evicted_on_read() {
        let cache = ResponseCache::new();
        cache.put("carry_data", json!(1));
        assert_eq!(cache.get("carry_data", Duration::ZERO), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn missing_keys_miss() {
        let cache = ResponseCache::new();
        assert_eq!(cache.get("chart_data", Duration::from_secs(30)), None);
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = ResponseCache::new();
        cache.put("a", json!(1));
        cache.put("b", json!(2));
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn put_replaces_existing_entries() {
        let cache = ResponseCache::new();
        cache.put("carry_data", json!(1));
        cache.put("carry_data", json!(2));
        assert_eq!(cache.get("carry_data", Duration::from_secs(30)), Some(json!(2)));
    }
}
