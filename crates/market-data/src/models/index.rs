use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quote::Quote;

/// A named market index and the provider symbol used to look it up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketIndex {
    /// Display name (e.g. "NIFTY 50")
    pub name: Cow<'static, str>,
    /// Provider symbol (e.g. "^NSEI")
    pub symbol: Cow<'static, str>,
}

impl MarketIndex {
    pub const fn new(name: &'static str, symbol: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            symbol: Cow::Borrowed(symbol),
        }
    }
}

/// Display projection of an index quote: `{name, price, change, percent}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub percent: Decimal,
}

impl IndexSnapshot {
    pub fn from_quote(index: &MarketIndex, quote: &Quote) -> Self {
        Self {
            name: index.name.to_string(),
            price: quote.last_price,
            change: quote.change,
            percent: quote.percent_change,
        }
    }
}
