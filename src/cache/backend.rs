//! Page Cache Backend
//!
//! The key-value seam the listing handler memoizes through. Backends report
//! their own failures as `AppError::CacheUnavailable`; callers decide whether
//! to fall back.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

// == Page Cache ==
#[async_trait]
pub trait PageCache: Send + Sync {
    /// Returns the live value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` for `ttl`. Last writer wins.
    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn forget(&self, key: &str) -> Result<()>;
}

// == Memory Page Cache ==
/// [`PageCache`] over a shared in-process [`CacheStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryPageCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryPageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the underlying store, used by the sweep task.
    pub fn store(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.store)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.store.read().await.contains(key)
    }
}

#[async_trait]
impl PageCache for MemoryPageCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write lock: expired entries are dropped and stats updated on read
        Ok(self.store.write().await.get(key))
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        self.store.write().await.put(key.to_string(), value, ttl);
        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<()> {
        self.store.write().await.forget(key);
        Ok(())
    }
}
