//! One-shot snapshot job: fetch the watchlist and indices, write the JSON
//! file and exit. Per-symbol failures are recorded in the file, not fatal.

use marketpulse_server::{build_state, config::Config, init_tracing, snapshot::refresh_snapshot};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let state = build_state(&config)?;

    refresh_snapshot(
        &state.quote_service,
        config.snapshot_symbols.as_slice(),
        &config.snapshot_path,
    )
    .await?;
    Ok(())
}
