use std::sync::Arc;

use marketpulse_market_data::{MarketDataProvider, QuoteService, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub quote_service: Arc<QuoteService>,
}

impl AppState {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            quote_service: Arc::new(QuoteService::new(provider)),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` filters, defaulting to `info`.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().flatten_event(true))
            .init(),
        LogFormat::Text => subscriber
            .with(fmt::layer().with_target(false).compact())
            .init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = YahooProvider::with_config(config.yahoo_config())?;
    tracing::info!(
        "Upstream provider {} at {} (timeout {:?})",
        provider.id(),
        config.yahoo_base_url,
        config.upstream_timeout
    );
    Ok(Arc::new(AppState::new(Arc::new(provider))))
}
