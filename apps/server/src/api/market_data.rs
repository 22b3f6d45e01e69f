use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use marketpulse_market_data::{BatchResult, IndexSnapshot, Quote, SearchResponse};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn search_symbols(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let response = state.quote_service.search(&params.q).await?;
    Ok(Json(response))
}

async fn get_stock(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.get_quote(&symbol).await?;
    Ok(Json(quote))
}

#[derive(Deserialize)]
struct BatchRequest {
    #[serde(default)]
    symbols: Vec<String>,
}

#[derive(Serialize)]
struct BatchResponse {
    stocks: BatchResult,
}

async fn get_stocks_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> ApiResult<Json<BatchResponse>> {
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let stocks = state.quote_service.fetch_batch(body.symbols.as_slice()).await?;
    Ok(Json(BatchResponse { stocks }))
}

#[derive(Serialize)]
struct IndicesResponse {
    indices: Vec<IndexSnapshot>,
}

async fn get_indices(State(state): State<Arc<AppState>>) -> Json<IndicesResponse> {
    let indices = state.quote_service.fetch_indices().await;
    Json(IndicesResponse { indices })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", get(search_symbols))
        .route("/stock/{symbol}", get(get_stock))
        .route("/stocks/batch", post(get_stocks_batch))
        .route("/indices", get(get_indices))
}
