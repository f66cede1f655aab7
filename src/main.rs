//! Banner API - banner delivery with an in-process TTL cache
//!
//! Serves feature-flag-like banners keyed by (tag, feature), with an
//! admin CRUD surface over an embedded persistent store.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banner_api::api::create_router;
use banner_api::cache::BannerCache;
use banner_api::repo::SledBannerRepo;
use banner_api::{spawn_sweep_task, AppState, BannerService, Config};

/// Main entry point for the banner service.
///
/// # Startup Sequence
/// 1. Load a local `.env` file (if any) and initialize tracing
/// 2. Load configuration from environment variables
/// 3. Open the embedded banner store
/// 4. Create the cache and start the background sweep task
/// 5. Wire the service and the axum router
/// 6. Serve until SIGINT/SIGTERM, then shut down gracefully
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environments configure directly
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banner_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Banner API");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, sweep_interval={}s, data_dir={}",
        config.server_port, config.cache_ttl, config.sweep_interval, config.data_dir
    );

    let repo = Arc::new(
        SledBannerRepo::open(&config.data_dir)
            .with_context(|| format!("opening banner store at {}", config.data_dir))?,
    );
    info!("Banner store opened");

    let cache = Arc::new(RwLock::new(BannerCache::new(Duration::from_secs(
        config.cache_ttl,
    ))));
    let sweep_handle = spawn_sweep_task(cache.clone(), config.sweep_interval);
    info!("Cache initialized, sweep task started");

    let service = Arc::new(BannerService::new(repo, cache.clone()));
    let app = create_router(AppState::new(service, cache));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(sweep_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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

    sweep_handle.abort();
    warn!("Sweep task aborted");
}
