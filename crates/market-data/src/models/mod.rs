//! Market data models
//!
//! - `quote` - Quote snapshot, per-symbol outcome and the rounding rules
//! - `batch` - Ordered symbol -> outcome mapping (BatchResult)
//! - `index` - Tracked market indices and their display projection
//! - `search` - Search result data (SearchResult, SearchResponse)

mod batch;
mod index;
mod quote;
mod search;

pub use batch::BatchResult;
pub use index::{IndexSnapshot, MarketIndex};
pub use quote::{derive_change, round_price, Quote, QuoteOutcome, QuoteSession};
pub use search::{SearchResponse, SearchResult};
