//! Quote service: single-symbol fetch, batch fan-out, index aggregation and search.
//!
//! Only [`QuoteService::get_quote`] and [`QuoteService::search`] surface typed
//! errors. Everything built on top of the single-symbol fetch turns failures
//! into values so that one bad symbol never takes down a whole request.

mod batch;
mod indices;
mod search;

use std::sync::Arc;

use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::{Quote, QuoteOutcome};
use crate::provider::MarketDataProvider;

pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// Latest quote for one symbol, with the provider's typed error on failure.
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(MarketDataError::InvalidInput(
                "symbol must not be empty".to_string(),
            ));
        }
        self.provider.get_latest_quote(symbol).await
    }

    /// Latest quote for one symbol as an outcome value. Never fails.
    pub async fn fetch_quote(&self, symbol: &str) -> QuoteOutcome {
        match self.get_quote(symbol).await {
            Ok(quote) => QuoteOutcome::Quote(quote),
            Err(e) => {
                warn!("Quote fetch failed for {}: {}", symbol, e);
                QuoteOutcome::failed(e.to_string())
            }
        }
    }
}
