//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries. The
//! sweep is the only place expiration is enforced; the scan lookup serves
//! expired entries until the sweep gets to them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::BannerCache;

/// Spawns the periodic sweep over the banner cache.
///
/// The task runs for the lifetime of the process, sleeping for the given
/// interval between passes and taking the write lock only for the removal
/// itself. The returned handle is aborted during graceful shutdown.
///
/// # Arguments
/// * `cache` - shared cache handle
/// * `interval_secs` - seconds between sweep passes
pub fn spawn_sweep_task(
    cache: Arc<RwLock<BannerCache>>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("starting cache sweep task with interval of {interval_secs}s");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache = cache.write().await;
                cache.sweep()
            };

            if removed > 0 {
                info!("sweep removed {removed} expired banners");
            } else {
                debug!("sweep found no expired banners");
            }
        }
    })
}
