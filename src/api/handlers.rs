//! API Handlers
//!
//! HTTP request handlers for the item listing, export and cache endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::cache::{derive_cache_key, MemoryPageCache, PageCache};
use crate::config::Config;
use crate::error::Result;
use crate::export::{to_csv, to_xlsx, CSV_FILE_NAME, XLSX_CONTENT_TYPE, XLSX_FILE_NAME};
use crate::models::{ClearCacheResponse, HealthResponse, Item, Page, RawParams};
use crate::query::QueryFilter;
use crate::service::ItemQueryService;
use crate::store::ItemStore;

/// Application state shared across all handlers.
///
/// The item store and page cache are injected so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub service: ItemQueryService,
    pub cache: Arc<dyn PageCache>,
    /// Lifetime of a cached listing page
    pub cache_ttl: Duration,
}

impl AppState {
    /// Creates a new AppState with the default page size and TTL.
    pub fn new(store: Arc<dyn ItemStore>, cache: Arc<dyn PageCache>) -> Self {
        Self::from_config(&Config::default(), store, cache)
    }

    /// Creates a new AppState sized from configuration.
    pub fn from_config(
        config: &Config,
        store: Arc<dyn ItemStore>,
        cache: Arc<dyn PageCache>,
    ) -> Self {
        Self {
            service: ItemQueryService::new(store, config.page_size),
            cache,
            cache_ttl: Duration::from_secs(config.cache_ttl),
        }
    }

    /// Convenience constructor over the in-memory cache, returning its handle too.
    pub fn with_memory_cache(store: Arc<dyn ItemStore>) -> (Self, MemoryPageCache) {
        let cache = MemoryPageCache::new();
        let state = Self::new(store, Arc::new(cache.clone()));
        (state, cache)
    }
}

/// Handler for GET /items
///
/// Serves the cached page for these exact parameters, or queries the store
/// and caches the result. A failing cache degrades to a direct query.
pub async fn index_handler(
    State(state): State<AppState>,
    params: RawParams,
) -> Result<Json<Page<Item>>> {
    info!(?params, "Index request");
    let filter = QueryFilter::from_params(&params)?;
    let cache_key = derive_cache_key(&params);

    match state.cache.get(&cache_key).await {
        Ok(Some(cached)) => match serde_json::from_str::<Page<Item>>(&cached) {
            Ok(page) => {
                info!(
                    "Cache hit for key {}: {} items",
                    cache_key,
                    page.data.len()
                );
                return Ok(Json(page));
            }
            Err(e) => warn!("Discarding undecodable cache entry {}: {}", cache_key, e),
        },
        Ok(None) => info!("Cache miss for key {}", cache_key),
        Err(e) => warn!("Cache lookup failed for key {}, querying store: {}", cache_key, e),
    }

    let page = state.service.fetch_page(&filter).await?;

    match serde_json::to_string(&page) {
        Ok(serialized) => match state.cache.put(&cache_key, serialized, state.cache_ttl).await {
            Ok(()) => info!("Data stored in cache for key {}", cache_key),
            Err(e) => warn!("Failed to cache page for key {}: {}", cache_key, e),
        },
        Err(e) => warn!("Failed to serialize page for key {}: {}", cache_key, e),
    }

    Ok(Json(page))
}

/// Handler for GET /items/export/excel
///
/// Exports the whole collection. Query parameters are not read, so filters
/// supplied by the caller have no effect on the file.
pub async fn export_excel_handler(State(state): State<AppState>) -> Result<Response> {
    let items = state.service.fetch_everything().await?;
    let workbook = to_xlsx(&items)?;
    info!("Exported {} items to {}", items.len(), XLSX_FILE_NAME);

    Ok(attachment(XLSX_CONTENT_TYPE, XLSX_FILE_NAME, workbook))
}

/// Handler for GET /items/export/csv
///
/// Applies category, price and search; ordering and paging parameters are
/// never read.
pub async fn export_csv_handler(
    State(state): State<AppState>,
    params: RawParams,
) -> Result<Response> {
    let filter = QueryFilter::from_export_params(&params)?;
    let items = state.service.fetch_all_matching(&filter).await?;
    info!("Exported {} items to {}", items.len(), CSV_FILE_NAME);

    Ok(attachment("text/csv", CSV_FILE_NAME, to_csv(&items)))
}

/// Handler for POST /items/cache/clear
///
/// Evicts the listing cached for exactly these parameters. Succeeds whether
/// or not an entry existed.
pub async fn clear_cache_handler(
    State(state): State<AppState>,
    params: RawParams,
) -> Result<Json<ClearCacheResponse>> {
    let cache_key = derive_cache_key(&params);
    state.cache.forget(&cache_key).await?;
    info!("Cache cleared for key {}", cache_key);

    Ok(Json(ClearCacheResponse::cleared()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

fn attachment(content_type: &str, file_name: &str, body: impl IntoResponse) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}
