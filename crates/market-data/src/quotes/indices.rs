use futures::future::join_all;
use tracing::{debug, warn};

use super::QuoteService;
use crate::constants::MARKET_INDICES;
use crate::models::{IndexSnapshot, MarketIndex};

impl QuoteService {
    /// Snapshots for the tracked market indices, in declaration order.
    pub async fn fetch_indices(&self) -> Vec<IndexSnapshot> {
        self.fetch_indices_from(MARKET_INDICES).await
    }

    /// Snapshots for the given indices. Indices whose fetch fails are
    /// dropped; the rest keep their relative order.
    pub async fn fetch_indices_from(&self, indices: &[MarketIndex]) -> Vec<IndexSnapshot> {
        let outcomes = join_all(indices.iter().map(|index| self.get_quote(&index.symbol))).await;

        let snapshots: Vec<IndexSnapshot> = indices
            .iter()
            .zip(outcomes)
            .filter_map(|(index, outcome)| match outcome {
                Ok(quote) => Some(IndexSnapshot::from_quote(index, &quote)),
                Err(e) => {
                    warn!("Skipping index {} ({}): {}", index.name, index.symbol, e);
                    None
                }
            })
            .collect();

        debug!("Fetched {} of {} indices", snapshots.len(), indices.len());
        snapshots
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::quotes::testing::MockProvider;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_all_indices_present() {
        let service = QuoteService::new(Arc::new(MockProvider::new(&[
            ("^NSEI", dec!(19500.456), dec!(19400)),
            ("^NSEBANK", dec!(44000), dec!(44100)),
            ("^BSESN", dec!(65000), dec!(65000)),
        ])));

        let indices = service.fetch_indices().await;
        let names: Vec<&str> = indices.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["NIFTY 50", "NIFTY BANK", "SENSEX"]);

        let nifty = &indices[0];
        assert_eq!(nifty.price, dec!(19500.46));
        assert_eq!(nifty.change, dec!(100.46));
        assert_eq!(nifty.percent, dec!(0.52));
    }

    #[tokio::test]
    async fn test_failed_index_is_omitted_in_place() {
        let service = QuoteService::new(Arc::new(MockProvider::new(&[
            ("^NSEI", dec!(19500), dec!(19400)),
            ("^BSESN", dec!(65000), dec!(64000)),
        ])));

        let indices = service.fetch_indices().await;
        let names: Vec<&str> = indices.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["NIFTY 50", "SENSEX"]);
    }

    #[tokio::test]
    async fn test_all_failures_yield_empty_sequence() {
        let service = QuoteService::new(Arc::new(MockProvider::new(&[])));
        assert!(service.fetch_indices().await.is_empty());
    }

    #[tokio::test]
    async fn test_custom_index_list() {
        let service = QuoteService::new(Arc::new(MockProvider::new(&[(
            "^GSPC",
            dec!(4500),
            dec!(4450),
        )])));
        let custom = [
            MarketIndex::new("S&P 500", "^GSPC"),
            MarketIndex::new("NASDAQ", "^IXIC"),
        ];

        let indices = service.fetch_indices_from(&custom).await;
        assert_eq!(indices.len(), 1);
        assert_eq!(indices[0].name, "S&P 500");
        assert_eq!(indices[0].percent, dec!(1.12));
    }
}
