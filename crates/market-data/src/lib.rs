//! MarketPulse Market Data Crate
//!
//! Fetches latest-session quotes from an upstream provider and normalizes
//! them into a fixed record shape, one symbol at a time or in batches.
//!
//! # Overview
//!
//! ```text
//!   symbols ──> QuoteService::fetch_batch ──┬─> fetch_quote(A) ──> Provider ──> Quote | error
//!                                           ├─> fetch_quote(B) ──> Provider ──> Quote | error
//!                                           └─> fetch_quote(C) ──> Provider ──> Quote | error
//!                                                       │
//!                                                       v
//!                                   BatchResult { A: .., B: .., C: .. }
//! ```
//!
//! Every requested symbol gets exactly one entry in a [`BatchResult`], whether
//! its fetch succeeded or not. [`QuoteService::fetch_indices`] runs the same
//! fan-out over a fixed list of market indices but drops the ones that fail.
//!
//! # Core Types
//!
//! - [`Quote`] - Normalized latest-session snapshot with derived change fields
//! - [`QuoteOutcome`] - A quote or the reason it could not be fetched
//! - [`BatchResult`] - Ordered symbol -> outcome mapping
//! - [`IndexSnapshot`] - Display projection of an index quote
//! - [`MarketDataProvider`] - Upstream abstraction, implemented by [`YahooProvider`]

pub mod constants;
pub mod errors;
pub mod models;
pub mod provider;
pub mod quotes;

pub use constants::{DEFAULT_EXCHANGE, DEFAULT_WATCHLIST, MARKET_INDICES};
pub use errors::MarketDataError;
pub use models::{
    BatchResult, IndexSnapshot, MarketIndex, Quote, QuoteOutcome, QuoteSession, SearchResponse,
    SearchResult,
};
pub use provider::yahoo::{YahooConfig, YahooProvider, DEFAULT_YAHOO_BASE_URL};
pub use provider::MarketDataProvider;
pub use quotes::QuoteService;
