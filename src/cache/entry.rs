//! Cache Entry Module
//!
//! A serialized listing page together with its expiry instant.

use std::time::{Duration, Instant};

// == Cache Entry ==
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized page
    pub value: String,
    /// When the entry stops being served
    pub expires_at: Instant,
}

impl CacheEntry {
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current instant reaches its expiry, so a
    /// zero TTL is never served.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
