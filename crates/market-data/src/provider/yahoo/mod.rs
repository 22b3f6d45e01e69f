//! Yahoo Finance market data provider.
//!
//! Latest quotes come from the v8 chart endpoint for the current session
//! (`range=1d`), which carries both the session metadata and the per-interval
//! samples the volume is summed from. Symbols are exchange-qualified the way
//! Yahoo expects them (e.g. `TCS.NS`, `RELIANCE.BO`, `^NSEI`).

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use num_traits::FromPrimitive;
use reqwest::{header, StatusCode};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::constants::{DATA_SOURCE_YAHOO, DEFAULT_EXCHANGE, SEARCH_RESULT_LIMIT};
use crate::errors::MarketDataError;
use crate::models::{Quote, QuoteSession, SearchResult};
use crate::provider::MarketDataProvider;

use models::{
    YahooChartResponse, YahooChartResult, YahooIntervalSamples, YahooSearchQuote,
    YahooSearchResponse,
};

/// Default host for both the chart and search endpoints.
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Configuration
// ============================================================================

/// Connection settings for [`YahooProvider`].
#[derive(Clone, Debug)]
pub struct YahooConfig {
    /// Scheme and host, without trailing slash
    pub base_url: String,
    /// Upper bound for a single request, connect through body
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooProvider {
    /// Create a provider with the default configuration.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(YahooConfig::default())
    }

    /// Create a provider against a custom host or with custom timeouts.
    pub fn with_config(config: YahooConfig) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| MarketDataError::ProviderError {
                provider: DATA_SOURCE_YAHOO.to_string(),
                message: format!("Failed to initialize HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_chart(&self, symbol: &str) -> Result<YahooChartResponse, MarketDataError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, encode(symbol));

        let response = self
            .client
            .get(&url)
            .query(&[("range", "1d"), ("interval", "5m")])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: DATA_SOURCE_YAHOO.to_string(),
                message: format!("Chart request for {} returned HTTP {}", symbol, status),
            });
        }

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                request_error(e)
            } else {
                MarketDataError::ProviderError {
                    provider: DATA_SOURCE_YAHOO.to_string(),
                    message: format!("Failed to parse chart response: {}", e),
                }
            }
        })
    }
}

fn request_error(e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout {
            provider: DATA_SOURCE_YAHOO.to_string(),
        }
    } else {
        MarketDataError::Network(e)
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        DATA_SOURCE_YAHOO
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(MarketDataError::InvalidInput(
                "symbol must not be empty".to_string(),
            ));
        }

        debug!("Fetching latest quote for {} from Yahoo", symbol);

        let response = self.fetch_chart(symbol).await?;

        if let Some(error) = response.chart.error {
            debug!(
                "Yahoo chart error for {}: {} ({})",
                symbol,
                error.code.as_deref().unwrap_or("unknown"),
                error.description.as_deref().unwrap_or("no description")
            );
            return Err(MarketDataError::NoData(symbol.to_string()));
        }

        let result = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::NoData(symbol.to_string()))?;

        normalize_chart(symbol, result)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        debug!("Searching Yahoo for '{}'", query);

        let url = format!("{}/v1/finance/search", self.base_url);
        let quotes_count = SEARCH_RESULT_LIMIT.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("quotesCount", quotes_count.as_str()),
                ("newsCount", "0"),
            ])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: DATA_SOURCE_YAHOO.to_string(),
                message: format!("Search request returned HTTP {}", status),
            });
        }

        let data: YahooSearchResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: DATA_SOURCE_YAHOO.to_string(),
                    message: format!("Failed to parse search response: {}", e),
                })?;

        Ok(data
            .quotes
            .into_iter()
            .filter_map(search_candidate)
            .collect())
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Map the first chart entry to a [`Quote`], applying the field fallbacks.
///
/// Only a missing price is fatal; every other field has a default.
fn normalize_chart(symbol: &str, result: YahooChartResult) -> Result<Quote, MarketDataError> {
    let meta = result.meta;
    let samples = result
        .indicators
        .and_then(|i| i.quote.into_iter().next())
        .unwrap_or_default();

    let last_price = meta
        .regular_market_price
        .and_then(to_decimal)
        .or_else(|| last_sample(&samples.close))
        .ok_or_else(|| MarketDataError::ValidationFailed {
            message: format!("No price in chart response for {}", symbol),
        })?;

    let previous_close = meta
        .chart_previous_close
        .or(meta.previous_close)
        .and_then(to_decimal)
        .unwrap_or_else(|| {
            warn!("No previous close for {}, reporting zero change", symbol);
            last_price
        });

    let day_high = meta
        .regular_market_day_high
        .and_then(to_decimal)
        .or_else(|| sample_extreme(&samples.high, Decimal::max))
        .unwrap_or(last_price);

    let day_low = meta
        .regular_market_day_low
        .and_then(to_decimal)
        .or_else(|| sample_extreme(&samples.low, Decimal::min))
        .unwrap_or(last_price);

    let timestamp = meta
        .regular_market_time
        .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
        .unwrap_or_else(Utc::now);

    let symbol = meta.symbol.unwrap_or_else(|| symbol.to_string());
    let name = display_name(
        meta.long_name.as_deref(),
        meta.short_name.as_deref(),
        &symbol,
    );
    let exchange = meta
        .full_exchange_name
        .or(meta.exchange_name)
        .unwrap_or_else(|| DEFAULT_EXCHANGE.to_string());

    Ok(Quote::from_session(QuoteSession {
        symbol,
        name,
        last_price,
        previous_close,
        day_high,
        day_low,
        open: first_sample(&samples.open),
        volume: total_volume(&samples),
        exchange,
        currency: meta.currency,
        timestamp,
    }))
}

fn search_candidate(item: YahooSearchQuote) -> Option<SearchResult> {
    let symbol = item.symbol.filter(|s| !s.is_empty())?;
    let name = display_name(item.long_name.as_deref(), item.short_name.as_deref(), &symbol);
    let exchange = item
        .exch_disp
        .or(item.exchange)
        .unwrap_or_else(|| DEFAULT_EXCHANGE.to_string());
    let asset_type = item
        .quote_type
        .map(|t| t.to_uppercase())
        .unwrap_or_else(|| "EQUITY".to_string());

    Some(SearchResult {
        currency: item.currency,
        score: item.score,
        ..SearchResult::new(symbol, name, exchange, asset_type)
    })
}

fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

fn first_sample(samples: &[Option<f64>]) -> Option<Decimal> {
    samples.iter().flatten().find_map(|v| to_decimal(*v))
}

fn last_sample(samples: &[Option<f64>]) -> Option<Decimal> {
    samples.iter().rev().flatten().find_map(|v| to_decimal(*v))
}

fn sample_extreme(samples: &[Option<f64>], pick: fn(Decimal, Decimal) -> Decimal) -> Option<Decimal> {
    samples
        .iter()
        .flatten()
        .filter_map(|v| to_decimal(*v))
        .reduce(pick)
}

/// Sum of the interval volumes; intervals without trades count as zero.
fn total_volume(samples: &YahooIntervalSamples) -> u64 {
    samples
        .volume
        .iter()
        .map(|v| v.unwrap_or(0))
        .fold(0, u64::saturating_add)
}

/// Prefer the long name, then the short name, then the symbol itself.
fn display_name(long_name: Option<&str>, short_name: Option<&str>, symbol: &str) -> String {
    [long_name, short_name]
        .into_iter()
        .flatten()
        .map(|n| n.trim().replace("&amp;", "&"))
        .find(|n| !n.is_empty())
        .unwrap_or_else(|| symbol.to_string())
}

// ============================================================================
// Tests
// ============================================================================
