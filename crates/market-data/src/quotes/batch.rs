use std::collections::HashSet;

use futures::future::join_all;
use tracing::{debug, info};

use super::QuoteService;
use crate::errors::MarketDataError;
use crate::models::BatchResult;

impl QuoteService {
    /// Fetch every symbol concurrently and return one outcome per symbol.
    ///
    /// All fetches run to completion before this returns; an individual
    /// failure is recorded in its own entry and never aborts the rest. The
    /// call itself fails only on malformed input: an empty list or a blank
    /// symbol. Duplicate symbols are collapsed, keeping first-occurrence order.
    pub async fn fetch_batch<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<BatchResult, MarketDataError> {
        let symbols = normalize_symbols(symbols)?;

        debug!("Fetching batch of {} symbols", symbols.len());

        // join_all yields outputs in input order, so each outcome lands in the
        // slot of the symbol that produced it.
        let outcomes = join_all(symbols.iter().map(|symbol| self.fetch_quote(symbol))).await;
        let batch: BatchResult = symbols.into_iter().zip(outcomes).collect();

        info!(
            "Batch fetch complete: {} succeeded, {} failed",
            batch.success_count(),
            batch.failure_count()
        );

        Ok(batch)
    }
}

/// Trim, validate and de-duplicate the requested symbols.
pub(crate) fn normalize_symbols<S: AsRef<str>>(
    symbols: &[S],
) -> Result<Vec<String>, MarketDataError> {
    if symbols.is_empty() {
        return Err(MarketDataError::InvalidInput(
            "symbols array required".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(symbols.len());
    let mut unique = Vec::with_capacity(symbols.len());

    for (position, symbol) in symbols.iter().enumerate() {
        let symbol = symbol.as_ref().trim();
        if symbol.is_empty() {
            return Err(MarketDataError::InvalidInput(format!(
                "symbol at position {} is blank",
                position
            )));
        }
        if seen.insert(symbol) {
            unique.push(symbol.to_string());
        }
    }

    Ok(unique)
}
