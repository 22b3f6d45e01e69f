mod common;

use axum::{body::to_bytes, body::Body, http::Request};
use tempfile::tempdir;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use common::{default_config, state};
use marketpulse_server::api::app_router;

#[tokio::test]
async fn serves_index_html_for_unknown_route() {
    let static_dir = tempdir().unwrap();
    let index_path = static_dir.path().join("index.html");
    std::fs::write(&index_path, "<html>Dashboard</html>").unwrap();

    let static_service =
        ServeDir::new(static_dir.path()).fallback(ServeFile::new(index_path.clone()));
    let app = app_router(state(), &default_config()).fallback_service(static_service);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/watchlist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "<html>Dashboard</html>".as_bytes());
}

#[tokio::test]
async fn api_routes_take_precedence_over_static_files() {
    let static_dir = tempdir().unwrap();
    let index_path = static_dir.path().join("index.html");
    std::fs::write(&index_path, "<html>Dashboard</html>").unwrap();

    let static_service = ServeDir::new(static_dir.path()).fallback(ServeFile::new(index_path));
    let app = app_router(state(), &default_config()).fallback_service(static_service);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "healthy");
}
