//! Background scheduler for periodic snapshot refresh.
//!
//! Disabled unless `MP_SNAPSHOT_INTERVAL_SECS` is greater than zero.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::main_lib::AppState;
use crate::snapshot::refresh_snapshot;

/// Starts the snapshot scheduler. Returns `None` when the interval is zero.
///
/// The first refresh runs immediately; a failed refresh is logged and the
/// previous snapshot file is left in place.
pub fn start_snapshot_scheduler(
    state: Arc<AppState>,
    path: PathBuf,
    symbols: Vec<String>,
    every: Duration,
) -> Option<JoinHandle<()>> {
    if every.is_zero() {
        info!("Snapshot scheduler disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        info!(
            "Snapshot scheduler started ({}s interval, {} symbols)",
            every.as_secs(),
            symbols.len()
        );

        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = refresh_snapshot(&state.quote_service, symbols.as_slice(), &path).await {
                warn!("Scheduled snapshot refresh failed: {:#}", e);
            }
        }
    }))
}
