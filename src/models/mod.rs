//! Data models for the item catalog API
//!
//! This module defines the domain record, the paginated page shape, the raw
//! query map and the response DTOs serialized by the HTTP layer.

pub mod item;
pub mod page;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::Item;
pub use page::Page;
pub use requests::RawParams;
pub use responses::{ClearCacheResponse, ErrorResponse, HealthResponse};
