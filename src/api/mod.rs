//! API Module
//!
//! HTTP handlers and routing for the item catalog.
//!
//! # Endpoints
//! - `GET /items` - Filtered, sorted, paginated listing (cached)
//! - `GET /items/export/csv` - Filtered CSV download
//! - `GET /items/export/excel` - Unfiltered XLSX download
//! - `POST /items/cache/clear` - Evict the listing cached for the given parameters
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
