//! Integration tests for the REST API

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use spam_rs::api::ApiServer;
use spam_rs::spam::SpamManager;
use tower::ServiceExt;

const BOUNDARY: &str = "spam-rs-test-boundary";

/// Helper to build a router around a fresh engine
fn test_router() -> Router {
    ApiServer::new(SpamManager::default(), "127.0.0.1:0".to_string(), 1024 * 1024).router()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn predict_request(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/spam/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn multipart_request(fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        if *name == "file" {
            body.push_str(
                "Content-Disposition: form-data; name=\"file\"; filename=\"corpus.csv\"\r\n\
                 Content-Type: text/csv\r\n\r\n",
            );
        } else {
            body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                name
            ));
        }
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));

    Request::builder()
        .method("POST")
        .uri("/api/spam/train")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let router = test_router();
    let (status, body) = send(&router, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let router = test_router();
    let (status, body) = send(&router, get("/api")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "spam-rs");
    let paths: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["path"].as_str())
        .collect();
    assert!(paths.contains(&"/api/spam/predict"));
}

#[tokio::test]
async fn test_predict_ham() {
    let router = test_router();
    let (status, body) = send(
        &router,
        predict_request(json!({
            "subject": "Meeting",
            "body": "Please see attached report, regards"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["is_spam"], false);
    assert_eq!(body["data"]["spam_score"], 0.0);
    assert_eq!(body["data"]["confidence"], 100.0);
    assert_eq!(body["data"]["features"]["spam_keywords"], 0);
    assert_eq!(body["data"]["using_custom_lexicon"], false);
}

#[tokio::test]
async fn test_predict_spam_with_missing_subject() {
    let router = test_router();
    let (status, body) = send(
        &router,
        predict_request(json!({ "body": "URGENT!!!! FREE CASH PRIZE, CLICK NOW" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_spam"], true);
    assert_eq!(body["data"]["features"]["subject_length"], 0);
}

#[tokio::test]
async fn test_predict_rejects_empty_message() {
    let router = test_router();
    let (status, body) = send(&router, predict_request(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Validation"));
}

#[tokio::test]
async fn test_train_then_predict() {
    let router = test_router();
    let csv = "text,label\njackpot jackpot casino,1\nstandup notes,0\n";

    let (status, body) = send(&router, multipart_request(&[("file", csv)])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["records"], 2);
    assert_eq!(body["data"]["spam_count"], 1);
    assert_eq!(body["data"]["ham_count"], 1);
    assert_eq!(body["data"]["text_column"], "text");
    assert_eq!(body["data"]["label_column"], "label");

    let (_, body) = send(&router, get("/api/spam/status")).await;
    assert_eq!(body["data"]["recalibrated"], true);
    assert_eq!(body["data"]["spam_terms"], 18 + 2);

    let (_, body) = send(&router, predict_request(json!({ "body": "jackpot" }))).await;
    assert_eq!(body["data"]["features"]["spam_keywords"], 1);
    assert_eq!(body["data"]["using_custom_lexicon"], true);
}

#[tokio::test]
async fn test_train_with_column_hints() {
    let router = test_router();
    let csv = "content,verdict\nbargain,1\nminutes,0\n";

    let (status, _) = send(&router, multipart_request(&[("file", csv)])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &router,
        multipart_request(&[
            ("text_column", "content"),
            ("label_column", "verdict"),
            ("file", csv),
        ]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["text_column"], "content");
}

#[tokio::test]
async fn test_train_without_text_column_leaves_engine_untouched() {
    let router = test_router();
    let payload = json!({ "subject": "Limited offer", "body": "see the report" });
    let (_, baseline) = send(&router, predict_request(payload.clone())).await;

    let csv = "subject,label\nprize,1\nhello,0\n";
    let (status, body) = send(&router, multipart_request(&[("file", csv)])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Configuration"));

    let (_, status_body) = send(&router, get("/api/spam/status")).await;
    assert_eq!(status_body["data"]["recalibrated"], false);

    let (_, after) = send(&router, predict_request(payload)).await;
    assert_eq!(baseline, after);
}

#[tokio::test]
async fn test_train_requires_file() {
    let router = test_router();
    let (status, body) = send(&router, multipart_request(&[("text_column", "text")])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Missing file"));
}
