use crate::models::MarketIndex;

/// Provider identifier for Yahoo Finance.
pub const DATA_SOURCE_YAHOO: &str = "YAHOO";

/// Exchange shown when the provider does not report one.
pub const DEFAULT_EXCHANGE: &str = "Unknown";

/// Fractional digits kept on prices and derived change values.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Maximum number of candidates returned by a symbol search.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Market indices tracked on the dashboard, in display order.
pub const MARKET_INDICES: &[MarketIndex] = &[
    MarketIndex::new("NIFTY 50", "^NSEI"),
    MarketIndex::new("NIFTY BANK", "^NSEBANK"),
    MarketIndex::new("SENSEX", "^BSESN"),
];

/// Symbols refreshed by the snapshot job when none are configured.
pub const DEFAULT_WATCHLIST: &[&str] = &[
    "TCS.NS",
    "RELIANCE.NS",
    "HDFCBANK.NS",
    "INFY.NS",
    "WIPRO.NS",
    "TECHM.NS",
    "ICICIBANK.NS",
];
