//! Market snapshot: the watchlist batch and the index aggregation, written
//! together to one JSON file for consumers that read a static file instead of
//! calling the HTTP routes.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use marketpulse_market_data::{BatchResult, IndexSnapshot, MarketDataError, QuoteService};
use serde::Serialize;
use tracing::{debug, info};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub stocks: BatchResult,
    pub indices: Vec<IndexSnapshot>,
    pub last_updated: DateTime<Utc>,
    /// `last_updated` in `YYYY-MM-DD HH:MM:SS` form
    pub timestamp: String,
}

impl MarketSnapshot {
    pub fn new(stocks: BatchResult, indices: Vec<IndexSnapshot>, at: DateTime<Utc>) -> Self {
        Self {
            stocks,
            indices,
            last_updated: at,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Fetch the watchlist and the market indices concurrently.
pub async fn build_snapshot<S: AsRef<str>>(
    service: &QuoteService,
    symbols: &[S],
) -> Result<MarketSnapshot, MarketDataError> {
    let (stocks, indices) = futures::join!(service.fetch_batch(symbols), service.fetch_indices());
    Ok(MarketSnapshot::new(stocks?, indices, Utc::now()))
}

/// Write the snapshot as pretty JSON. The file is replaced atomically so a
/// reader never sees a partially written snapshot.
pub async fn write_snapshot(path: &Path, snapshot: &MarketSnapshot) -> anyhow::Result<()> {
    let body = serde_json::to_vec_pretty(snapshot)?;
    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || replace_file(&target, &body))
        .await
        .map_err(|e| anyhow::anyhow!("Snapshot write task failed: {}", e))??;

    debug!("Snapshot written to {}", path.display());
    Ok(())
}

/// Writes `body` to a uniquely named temp file next to `path`, then renames
/// it over `path`. Concurrent writers each get their own temp file; the temp
/// file is deleted when any step fails.
fn replace_file(path: &Path, body: &[u8]) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let prefix = format!(
        ".{}.",
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".to_string())
    );
    let mut tmp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(&dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(body)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

/// Build and write one snapshot, logging a summary.
pub async fn refresh_snapshot<S: AsRef<str>>(
    service: &QuoteService,
    symbols: &[S],
    path: &Path,
) -> anyhow::Result<MarketSnapshot> {
    let snapshot = build_snapshot(service, symbols).await?;
    write_snapshot(path, &snapshot).await?;

    info!(
        "Snapshot {}: {} stocks ok, {} failed, {} indices -> {}",
        snapshot.timestamp,
        snapshot.stocks.success_count(),
        snapshot.stocks.failure_count(),
        snapshot.indices.len(),
        path.display()
    );
    Ok(snapshot)
}
