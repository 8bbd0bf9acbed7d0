//! Item Catalog - item listing with cached pages and CSV/Excel export

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use item_catalog::api::create_router;
use item_catalog::cache::MemoryPageCache;
use item_catalog::store::MemoryItemStore;
use item_catalog::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the item catalog server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Load the item store and create the page cache
/// 4. Start background cache sweep task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Item Catalog Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, cleanup_interval={}s, page_size={}",
        config.server_port, config.cache_ttl, config.cleanup_interval, config.page_size
    );

    let store = match &config.items_file {
        Some(path) => MemoryItemStore::from_json_file(path)
            .await
            .with_context(|| format!("loading items from {}", path.display()))?,
        None => {
            warn!("ITEMS_FILE not set, starting with an empty item store");
            MemoryItemStore::default()
        }
    };
    if store.is_empty().await {
        warn!("Item store is empty, listings will return no data");
    } else {
        info!("Item store loaded with {} items", store.len().await);
    }

    let cache = MemoryPageCache::new();
    let state = AppState::from_config(&config, Arc::new(store), Arc::new(cache.clone()));
    info!("Item store and page cache initialized");

    let cleanup_handle =
        spawn_cleanup_task(cache, Duration::from_secs(config.cleanup_interval));
    info!("Background cache sweep task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cache sweep task aborted");
}
