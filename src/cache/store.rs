//! Cache Store Module
//!
//! HashMap of serialized pages with per-entry TTL. Entries leave the store
//! only when they expire or are cleared by key.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores a value under `key`, replacing any previous value and its TTL.
    pub fn put(&mut self, key: String, value: String, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value if present and not expired.
    ///
    /// An expired entry is removed on access and counted as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Forget ==
    /// Removes an entry. Returns whether one was present.
    pub fn forget(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_clear();
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    /// Returns true if a live entry exists, without touching statistics.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|entry| !entry.is_expired())
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new();

        store.put("items_a".to_string(), "page".to_string(), HOUR);

        assert_eq!(store.get("items_a").as_deref(), Some("page"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_missing() {
        let mut store = CacheStore::new();
        assert!(store.get("items_missing").is_none());
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_forget() {
        let mut store = CacheStore::new();

        store.put("items_a".to_string(), "page".to_string(), HOUR);
        assert!(store.forget("items_a"));

        assert!(store.is_empty());
        assert!(store.get("items_a").is_none());
    }

    #[test]
    fn test_store_forget_missing() {
        let mut store = CacheStore::new();
        assert!(!store.forget("items_missing"));
        assert_eq!(store.stats().clears, 0);
    }

    #[test]
    fn test_store_overwrite_resets_value() {
        let mut store = CacheStore::new();

        store.put("items_a".to_string(), "old".to_string(), HOUR);
        store.put("items_a".to_string(), "new".to_string(), HOUR);

        assert_eq!(store.get("items_a").as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new();

        store.put("items_a".to_string(), "page".to_string(), Duration::from_millis(20));
        assert!(store.contains("items_a"));

        sleep(Duration::from_millis(40));

        assert!(!store.contains("items_a"));
        assert!(store.get("items_a").is_none());
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_has_no_capacity_eviction() {
        let mut store = CacheStore::new();
        for i in 0..5_000 {
            store.put(format!("items_{}", i), "page".to_string(), HOUR);
        }
        assert_eq!(store.len(), 5_000);
        assert!(store.contains("items_0"));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();

        store.put("items_a".to_string(), "page".to_string(), HOUR);
        store.get("items_a");
        store.get("items_b");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new();

        store.put("items_a".to_string(), "page".to_string(), Duration::from_millis(20));
        store.put("items_b".to_string(), "page".to_string(), HOUR);

        sleep(Duration::from_millis(40));

        assert_eq!(store.cleanup_expired(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("items_b").is_some());
    }
}
