//! HTTP tests driving the router in-process

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use biasio_core::BiasResponse;
use biasio_server::{build_app, AppState, ServerConfig, DEFAULT_TITLE};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    build_app(AppState::new(ServerConfig::default()).unwrap())
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn post_respond(body: &str) -> (StatusCode, Value) {
    let request = Request::post("/api/respond")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn test_respond_returns_response_pair() {
    let (status, body) = post_respond(r#"{"message": "As a woman, what about pay gap in Germany?"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let response: BiasResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.topic, "pay_gap");
    assert_eq!(response.region.as_str(), "europe");
    assert_eq!(response.gender, "female");
    assert_eq!(response.nationality, "European");
    assert!(response.biased.starts_with("Because you are a man in Europe"));
    assert_eq!(response.bias_note, "Normalizes gender-based pay disparities.");
}

#[tokio::test]
async fn test_respond_wire_fields() {
    let (status, body) = post_respond(r#"{"message": "Tell me about promotions"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let fields = body.as_object().unwrap();
    for key in ["topic", "region", "gender", "nationality", "biased", "fair", "bias_note"] {
        assert!(fields[key].is_string(), "missing {}", key);
    }
    assert_eq!(fields.len(), 7);
    assert_eq!(body["gender"], "unspecified");
    assert_eq!(body["nationality"], "unspecified");
    assert_eq!(body["biased"], "Your promotion should favor certain groups over others.");
}

#[tokio::test]
async fn test_respond_trims_message() {
    let (_, padded) = post_respond(r#"{"message": "   Tell me about promotions \n"}"#).await;
    let (_, plain) = post_respond(r#"{"message": "Tell me about promotions"}"#).await;
    assert_eq!(padded, plain);
}

#[tokio::test]
async fn test_empty_messages_rejected() {
    let expected = serde_json::json!({ "error": "Please enter a message." });

    for body in [
        r#"{"message": ""}"#,
        r#"{"message": "   \t  "}"#,
        r#"{"message": null}"#,
        r#"{}"#,
        r#"{"message": 42}"#,
        "[1, 2]",
        "not json at all",
        "",
    ] {
        let (status, value) = post_respond(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(value, expected, "body {:?}", body);
    }
}

#[tokio::test]
async fn test_respond_ignores_content_type() {
    let request = Request::post("/api/respond")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"message": "hello there"}"#))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["topic"], "fallback");
}

#[tokio::test]
async fn test_landing_page() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    let page = String::from_utf8(body).unwrap();
    assert!(page.contains(&format!("<title>{}</title>", DEFAULT_TITLE)));
    assert!(page.contains("/static/app.js"));
}

#[tokio::test]
async fn test_static_assets() {
    let response = app()
        .oneshot(Request::get("/static/app.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.contains("javascript"));

    let (status, _) = get("/static/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn test_topics_listing() {
    let (status, body) = get("/api/topics").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = value["topics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["nationality", "gender", "pay_gap", "salary", "promotion", "accent", "jobs"]
    );
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let (status, _) = get("/metrics").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let config = ServerConfig {
        max_body_bytes: 32,
        ..Default::default()
    };
    let app = build_app(AppState::new(config).unwrap());
    let body = format!(r#"{{"message": "{}"}}"#, "a".repeat(128));
    let request = Request::post("/api/respond")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_custom_title() {
    let config = ServerConfig {
        title: "Hiring Bias Workshop".to_string(),
        ..Default::default()
    };
    let app = build_app(AppState::new(config).unwrap());
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("<title>Hiring Bias Workshop</title>"));
}
