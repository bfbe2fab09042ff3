//! API client tests against a local stand-in for the backend.

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;

use loppestars::api::{ApiClient, ProcessImageRequest, ScrapeSummary};
use loppestars::{ApiError, Config};

async fn send_scrape_status(
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if query.get("path").map(String::as_str) != Some("functions/send-scrape-status") {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "unknown function" })));
    }
    match query.get("token").map(String::as_str) {
        Some("secret") => {}
        Some("flaky") => return (StatusCode::OK, Json(json!({ "success": false }))),
        _ => return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad token" }))),
    }
    let well_formed = body["emails"].as_array().is_some_and(|e| !e.is_empty())
        && body["summary"]["markets"].is_u64()
        && body["summary"]["timestamp"].is_u64();
    if !well_formed {
        return (StatusCode::BAD_REQUEST, Json(json!({ "success": false })));
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn process(
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if query.get("token").map(String::as_str) != Some("secret") {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    let path = body["imagePath"].as_str().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({ "processedImageUrl": format!("https://cdn.test/{path}") })),
    )
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route(
            "/markets/today",
            get(|| async { Json(json!([{ "id": "1", "name": "Loppemarked i Valby" }])) }),
        )
        .route("/process", post(process))
        .route("/functions/v1/send-scrape-status", post(send_scrape_status));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base: &str, token: Option<&str>) -> ApiClient {
    ApiClient::new(&Config {
        api_base_url: base.to_string(),
        functions_token: token.map(str::to_string),
        storage_dir: None,
    })
    .unwrap()
}

fn status_of(err: &ApiError) -> Option<u16> {
    match err {
        ApiError::Status { status, .. } => Some(status.as_u16()),
        _ => None,
    }
}

#[tokio::test]
async fn scrape_status_success() {
    let base = spawn_backend().await;
    let ack = client(&base, Some("secret"))
        .send_scrape_status(vec!["test@example.com".to_string()], ScrapeSummary::now(1))
        .await
        .unwrap();
    assert!(ack.success);
}

#[tokio::test]
async fn scrape_status_failures() {
    let base = spawn_backend().await;

    let err = client(&base, Some("wrong"))
        .send_scrape_status(vec!["test@example.com".to_string()], ScrapeSummary::now(1))
        .await
        .unwrap_err();
    assert_eq!(status_of(&err), Some(401));

    let err = client(&base, Some("flaky"))
        .send_scrape_status(vec!["test@example.com".to_string()], ScrapeSummary::now(1))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));

    let err = client(&base, Some("secret"))
        .send_scrape_status(Vec::new(), ScrapeSummary::now(1))
        .await
        .unwrap_err();
    assert_eq!(status_of(&err), Some(400));
}

#[tokio::test]
async fn health_markets_and_process() {
    let base = spawn_backend().await;
    let api = client(&base, Some("secret"));

    assert_eq!(api.health().await.unwrap().status, "ok");

    let markets = api.markets_today().await.unwrap();
    assert_eq!(markets.len(), 1);
    assert_eq!(markets[0]["name"], "Loppemarked i Valby");

    let processed = api
        .process_image(&ProcessImageRequest {
            image_path: "ratings/u1/photo.jpg".to_string(),
            user_id: "u1".to_string(),
            blur_strength: 15,
        })
        .await
        .unwrap();
    assert_eq!(
        processed.processed_image_url,
        "https://cdn.test/ratings/u1/photo.jpg"
    );

    let err = client(&base, None)
        .process_image(&ProcessImageRequest {
            image_path: "x.jpg".to_string(),
            user_id: "u1".to_string(),
            blur_strength: 15,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MissingToken));
}

#[tokio::test]
#[ignore = "calls the live proxy; needs network and SUPABASE_FUNCTIONS_TOKEN"]
async fn live_scrape_status_proxy() {
    let api = ApiClient::new(&Config::from_env()).unwrap();
    let ack = api
        .send_scrape_status(vec!["test@example.com".to_string()], ScrapeSummary::now(1))
        .await
        .unwrap();
    assert!(ack.success);
}
