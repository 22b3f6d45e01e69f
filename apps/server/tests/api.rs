mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{app, get, send};
use serde_json::json;

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_service() {
    let (response, body) = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "service": "marketpulse" }));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let (response, _) = get("/health").await;
    let id = response.headers().get("x-request-id").unwrap();
    assert!(!id.is_empty());

    // Errors go through the same layers.
    let (response, _) = get("/api/stock/BADSYM").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/api/indices")
        .header("x-request-id", "trace-abc-123")
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(app(), request).await;
    assert_eq!(response.headers()["x-request-id"], "trace-abc-123");
}

#[tokio::test]
async fn single_stock_is_normalized() {
    let (response, body) = get("/api/stock/TCS.NS").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body["symbol"], "TCS.NS");
    assert_eq!(body["lastPrice"], 100.0);
    assert_eq!(body["change"], 10.0);
    assert_eq!(body["percentChange"], 11.11);
    assert_eq!(body["exchange"], "NSE");
}

#[tokio::test]
async fn unknown_stock_is_404() {
    let (response, body) = get("/api/stock/BADSYM").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "code": 404, "error": "Symbol not found: BADSYM" }));

    let (response, _) = get("/api/stock/EMPTY.NS").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upstream_failures_map_to_gateway_statuses() {
    let (response, body) = get("/api/stock/SLOW.NS").await;
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["code"], 504);

    let (response, _) = get("/api/stock/BROKEN.NS").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn batch_keeps_failures_per_symbol_in_request_order() {
    let (response, body) = send(
        app(),
        post_json(
            "/api/stocks/batch",
            r#"{"symbols": ["TCS.NS", "BADSYM", "INFY.NS", "TCS.NS"]}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let tcs = body.find("\"TCS.NS\"").unwrap();
    let bad = body.find("\"BADSYM\"").unwrap();
    let infy = body.find("\"INFY.NS\"").unwrap();
    assert!(tcs < bad && bad < infy);

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    let stocks = value["stocks"].as_object().unwrap();
    assert_eq!(stocks.len(), 3);
    assert_eq!(stocks["TCS.NS"]["percentChange"], 11.11);
    assert_eq!(stocks["BADSYM"], json!({ "error": "Symbol not found: BADSYM" }));
    assert_eq!(stocks["INFY.NS"]["change"], 10.0);
}

#[tokio::test]
async fn batch_rejects_empty_and_malformed_input() {
    for body in [r#"{"symbols": []}"#, r#"{}"#, r#"{"symbols": ["TCS.NS", "  "]}"#] {
        let (response, text) = send(app(), post_json("/api/stocks/batch", body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["code"], 400);
    }

    let (response, text) = send(app(), post_json("/api/stocks/batch", "not json")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn indices_omit_failed_entries() {
    let (response, body) = get("/api/indices").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "indices": [
                { "name": "NIFTY 50", "price": 19500.0, "change": 100.0, "percent": 0.52 }
            ]
        })
    );
}

#[tokio::test]
async fn search_normalizes_and_deduplicates() {
    let (response, body) = get("/api/search?q=tcs").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body["query"], "TCS");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["symbol"], "TCS.NS");
    assert_eq!(results[0]["type"], "EQUITY");
}

#[tokio::test]
async fn search_requires_query() {
    let (response, body) = get("/api/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (response, _) = get("/api/search?q=%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
