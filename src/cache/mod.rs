//! Cache Module
//!
//! Listing-page memoization: cache key derivation, the [`PageCache`] seam and
//! an in-memory TTL store behind it.

mod backend;
mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use backend::{MemoryPageCache, PageCache};
pub use entry::CacheEntry;
pub use key::derive_cache_key;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Namespace prefix of every listing cache key
pub const KEY_PREFIX: &str = "items_";

/// Lifetime of a cached listing page in seconds (60 minutes)
pub const DEFAULT_TTL_SECS: u64 = 60 * 60;
