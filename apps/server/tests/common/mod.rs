#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::to_bytes, body::Body, http::Request, response::Response, Router};
use chrono::Utc;
use marketpulse_market_data::{
    MarketDataError, MarketDataProvider, Quote, QuoteSession, SearchResult,
};
use marketpulse_server::{api::app_router, config::Config, AppState};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tower::ServiceExt;

/// Canned upstream: a handful of known symbols plus one per failure mode.
pub struct StubProvider;

fn quote(symbol: &str, last_price: Decimal, previous_close: Decimal) -> Quote {
    Quote::from_session(QuoteSession {
        symbol: symbol.to_string(),
        name: format!("{} Limited", symbol),
        last_price,
        previous_close,
        day_high: last_price,
        day_low: previous_close,
        open: None,
        volume: 1_000,
        exchange: "NSE".to_string(),
        currency: Some("INR".to_string()),
        timestamp: Utc::now(),
    })
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        match symbol {
            "TCS.NS" => Ok(quote(symbol, dec!(100.004), dec!(90))),
            "INFY.NS" => Ok(quote(symbol, dec!(1500), dec!(1490))),
            "^NSEI" => Ok(quote(symbol, dec!(19500), dec!(19400))),
            "EMPTY.NS" => Err(MarketDataError::NoData(symbol.to_string())),
            "SLOW.NS" => Err(MarketDataError::Timeout {
                provider: "STUB".to_string(),
            }),
            "BROKEN.NS" => Err(MarketDataError::ProviderError {
                provider: "STUB".to_string(),
                message: "HTTP 500 Internal Server Error".to_string(),
            }),
            _ => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, MarketDataError> {
        Ok(vec![
            SearchResult::new(format!("{}.NS", query), "Tata Consultancy Services", "NSE", "EQUITY"),
            SearchResult::new(format!("{}.BO", query), "Tata Consultancy Services", "BSE", "EQUITY"),
        ])
    }
}

pub fn default_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

pub fn state() -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(StubProvider)))
}

pub fn app() -> Router {
    app_router(state(), &default_config())
}

pub async fn send(app: Router, request: Request<Body>) -> (Response, String) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    (
        Response::from_parts(parts, Body::empty()),
        String::from_utf8(bytes.to_vec()).unwrap(),
    )
}

pub async fn get(uri: &str) -> (Response, serde_json::Value) {
    let (response, body) = send(app(), Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
    (response, serde_json::from_str(&body).unwrap())
}
