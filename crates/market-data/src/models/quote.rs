use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::PRICE_DECIMAL_PLACES;
use crate::errors::MarketDataError;

/// Raw trading-session values for one instrument, after provider fallbacks
/// have been applied but before derived fields are computed.
#[derive(Clone, Debug)]
pub struct QuoteSession {
    pub symbol: String,
    pub name: String,
    pub last_price: Decimal,
    pub previous_close: Decimal,
    pub day_high: Decimal,
    pub day_low: Decimal,
    pub open: Option<Decimal>,
    pub volume: u64,
    pub exchange: String,
    pub currency: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Latest trade snapshot for one instrument.
///
/// `change` and `percent_change` are always derived from `last_price` and
/// `previous_close`; build a `Quote` through [`Quote::from_session`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Exchange-qualified symbol (e.g. "TCS.NS")
    pub symbol: String,

    /// Display name, falls back to the symbol
    pub name: String,

    /// Last traded price, rounded to 2 dp
    pub last_price: Decimal,

    /// `last_price - previous_close`, rounded to 2 dp
    pub change: Decimal,

    /// `change / previous_close * 100`, rounded to 2 dp
    pub percent_change: Decimal,

    pub previous_close: Decimal,
    pub day_high: Decimal,
    pub day_low: Decimal,

    /// First traded price of the session, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,

    /// Session volume, summed over the provider's interval samples
    pub volume: u64,

    /// Exchange display name, "Unknown" when absent upstream
    pub exchange: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Time of the last trade
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Build a quote, rounding the last price and deriving the change fields.
    pub fn from_session(session: QuoteSession) -> Self {
        let last_price = round_price(session.last_price);
        let (change, percent_change) = derive_change(last_price, session.previous_close);

        Self {
            symbol: session.symbol,
            name: session.name,
            last_price,
            change,
            percent_change,
            previous_close: session.previous_close,
            day_high: session.day_high,
            day_low: session.day_low,
            open: session.open,
            volume: session.volume,
            exchange: session.exchange,
            currency: session.currency,
            timestamp: session.timestamp,
        }
    }
}

/// Round a price to the display precision (midpoint away from zero).
pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Absolute and percentage change against the previous close.
///
/// The percentage is computed from the already rounded change. It is zero
/// when there is no previous close to compare against, or when the ratio
/// does not fit in a `Decimal`; the same goes for a change that overflows.
pub fn derive_change(last_price: Decimal, previous_close: Decimal) -> (Decimal, Decimal) {
    let change = last_price
        .checked_sub(previous_close)
        .map(round_price)
        .unwrap_or(Decimal::ZERO);
    let percent = change
        .checked_div(previous_close)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_price)
        .unwrap_or(Decimal::ZERO);
    (change, percent)
}

/// Per-symbol result of a fetch: either a quote or the reason it failed.
///
/// Serialized untagged, so a failure renders as `{"error": "..."}` and a
/// success renders as the plain quote object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteOutcome {
    Quote(Quote),
    Failed { error: String },
}

impl QuoteOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Quote(_))
    }

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Self::Quote(quote) => Some(quote),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Quote(_) => None,
            Self::Failed { error } => Some(error),
        }
    }

    pub fn into_quote(self) -> Option<Quote> {
        match self {
            Self::Quote(quote) => Some(quote),
            Self::Failed { .. } => None,
        }
    }
}

impl From<Result<Quote, MarketDataError>> for QuoteOutcome {
    fn from(result: Result<Quote, MarketDataError>) -> Self {
        match result {
            Ok(quote) => Self::Quote(quote),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}
