//! Yahoo Finance API response models.
//!
//! These cover the two endpoints the provider uses: the v8 chart endpoint
//! (latest session meta plus per-interval samples) and the v1 search endpoint.
//! Every field is optional because Yahoo omits data freely, especially for
//! indices and thinly traded symbols.

use serde::Deserialize;

/// Main response wrapper for the chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChart,
}

/// Chart container. `result` is `null` when `error` is set.
#[derive(Debug, Deserialize)]
pub struct YahooChart {
    #[serde(default)]
    pub result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    pub error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// One chart entry: session metadata plus interval samples
#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    pub meta: YahooChartMeta,
    #[serde(default)]
    pub indicators: Option<YahooIndicators>,
}

/// Session metadata for the charted symbol
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub full_exchange_name: Option<String>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_time: Option<i64>,
    pub chart_previous_close: Option<f64>,
    pub previous_close: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Vec<YahooIntervalSamples>,
}

/// Per-interval OHLCV samples. Yahoo emits `null` for intervals with no trades.
#[derive(Debug, Default, Deserialize)]
pub struct YahooIntervalSamples {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

/// Response wrapper for the search API
#[derive(Debug, Deserialize)]
pub struct YahooSearchResponse {
    #[serde(default)]
    pub quotes: Vec<YahooSearchQuote>,
}

/// A single search candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSearchQuote {
    pub symbol: Option<String>,
    #[serde(rename = "longname")]
    pub long_name: Option<String>,
    #[serde(rename = "shortname")]
    pub short_name: Option<String>,
    pub exchange: Option<String>,
    pub exch_disp: Option<String>,
    pub quote_type: Option<String>,
    pub currency: Option<String>,
    pub score: Option<f64>,
}
