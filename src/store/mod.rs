//! Item Store Module
//!
//! The persistence seam of the catalog. The service only talks to
//! [`ItemStore`]; the in-memory implementation ships for local runs and tests.

mod memory;

use async_trait::async_trait;

pub use memory::MemoryItemStore;

use crate::error::Result;
use crate::models::Item;
use crate::query::{ItemQuery, Window};

// == Item Store ==
/// Read access to the item collection.
///
/// Implementations surface connection and query failures as
/// `AppError::DataStoreUnavailable`. Callers do not retry.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Number of items matching the query.
    async fn count(&self, query: &ItemQuery) -> Result<u64>;

    /// Matching items in query order, restricted to `window` when given.
    async fn select(&self, query: &ItemQuery, window: Option<Window>) -> Result<Vec<Item>>;
}
