//! API Routes
//!
//! Configures the Axum router with all item catalog endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, export_csv_handler, export_excel_handler, health_handler, index_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/items", get(index_handler))
        .route("/items/export/excel", get(export_excel_handler))
        .route("/items/export/csv", get(export_csv_handler))
        .route("/items/cache/clear", post(clear_cache_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::store::MemoryItemStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let store = MemoryItemStore::new(vec![Item::new(1, "Phone", "Electronics", 799.0, "Active")]);
        let (state, _) = AppState::with_memory_cache(Arc::new(store));
        create_router(state)
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_routes_respond() {
        assert_eq!(status_of("GET", "/health").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/items").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/items/export/csv").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/items/export/excel").await, StatusCode::OK);
        assert_eq!(status_of("POST", "/items/cache/clear").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_clear_requires_post() {
        assert_eq!(
            status_of("GET", "/items/cache/clear").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("GET", "/items/unknown").await, StatusCode::NOT_FOUND);
    }
}
