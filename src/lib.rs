//! Item Catalog - item listing with cached pages and CSV/Excel export
//!
//! Filters, sorts and paginates items from an injected store, memoizes
//! listing pages per raw parameter set, and serves download exports.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::AppError;
pub use service::ItemQueryService;
pub use tasks::spawn_cleanup_task;
