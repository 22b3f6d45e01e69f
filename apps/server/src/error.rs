use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marketpulse_market_data::MarketDataError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MarketData(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::MarketData(e) => match e {
                MarketDataError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                MarketDataError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                MarketDataError::NotSupported { .. } => StatusCode::NOT_IMPLEMENTED,
                // Upstream answered badly or not at all.
                _ => StatusCode::BAD_GATEWAY,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("Request failed with {}: {}", status, self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
