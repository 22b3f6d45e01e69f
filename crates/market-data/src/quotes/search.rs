use std::collections::HashSet;

use tracing::debug;

use super::QuoteService;
use crate::constants::SEARCH_RESULT_LIMIT;
use crate::errors::MarketDataError;
use crate::models::SearchResponse;

impl QuoteService {
    /// Free-text symbol search.
    ///
    /// The query is trimmed and upper-cased. Candidates sharing a display name
    /// (the same company listed on several exchanges) are collapsed to the
    /// first one the provider ranked.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, MarketDataError> {
        let query = query.trim().to_uppercase();
        if query.is_empty() {
            return Err(MarketDataError::InvalidInput(
                "query parameter required".to_string(),
            ));
        }

        let candidates = self.provider.search(&query).await?;
        let total = candidates.len();

        let mut seen_names = HashSet::new();
        let results: Vec<_> = candidates
            .into_iter()
            .filter(|c| seen_names.insert(c.name.clone()))
            .take(SEARCH_RESULT_LIMIT)
            .collect();

        debug!(
            "Search '{}' returned {} candidates, {} after de-duplication",
            query,
            total,
            results.len()
        );

        Ok(SearchResponse { query, results })
    }
}
