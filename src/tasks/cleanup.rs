//! Cache Sweep Task
//!
//! Expired entries are already skipped on read; the sweep reclaims the memory
//! of pages nobody asks for again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryPageCache;

/// Shortest sweep period; guards against a zero interval spinning the task.
const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Spawns a task that removes expired entries from `cache` every `interval`.
///
/// Returns the JoinHandle so the caller can abort the task on shutdown.
pub fn spawn_cleanup_task(cache: MemoryPageCache, interval: Duration) -> JoinHandle<()> {
    let interval = interval.max(MIN_INTERVAL);
    let store = cache.store();

    tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let (removed, stats) = {
                let mut guard = store.write().await;
                let removed = guard.cleanup_expired();
                (removed, guard.stats())
            };

            if removed > 0 {
                info!("Cache sweep: removed {} expired pages", removed);
            }
            debug!(
                "Cache sweep: {} entries, {} hits, {} misses, hit rate {:.2}",
                stats.total_entries,
                stats.hits,
                stats.misses,
                stats.hit_rate()
            );
        }
    })
}
