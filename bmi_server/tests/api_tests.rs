//! End-to-end tests for the bmid HTTP API.
//!
//! These tests drive the full router with in-process requests and verify:
//! - The calculation contract (rounding, categories, canned texts)
//! - Validation failures and their status codes
//! - History ordering and the on-disk log format

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bmi_core::FileLogStore;
use bmi_server::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tower::ServiceExt;

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn log_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("bmi_data.txt")
}

fn test_router(path: &Path) -> Router {
    router(AppState::new(FileLogStore::new(path)))
}

async fn send_json(app: Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate-bmi")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("Response was not JSON");
    (status, value)
}

async fn post_calculate(app: Router, body: Value) -> (StatusCode, Value) {
    send_json(app, body.to_string()).await
}

async fn get_history(app: Router) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/bmi-history")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("Response was not JSON");
    (status, value)
}

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().expect("expected a number");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[tokio::test]
async fn test_metric_calculation_contract() {
    let temp_dir = setup_test_dir();
    let app = test_router(&log_path(&temp_dir));

    let (status, body) = post_calculate(
        app,
        json!({"weight": 70.0, "height": 175.0, "isMetric": true}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let data = &body["data"];
    assert_close(&data["bmi"], 22.9);
    assert_eq!(data["category"], json!("Normal weight"));
    assert_close(&data["idealWeight"], 67.4);
    assert_eq!(
        data["healthRisks"],
        json!("Your BMI indicates that you are within a healthy weight range. Keep up the good work!")
    );
    assert_eq!(
        data["suggestion"],
        json!("Continue maintaining a balanced diet and regular exercise routine to stay within a healthy weight range.")
    );
    assert_eq!(data["saveResult"]["success"], json!(true));
    assert_eq!(
        data["saveResult"]["message"],
        json!("Data saved successfully to bmi_data.txt")
    );
}

#[tokio::test]
async fn test_imperial_boundary_display_vs_category() {
    let temp_dir = setup_test_dir();
    let app = test_router(&log_path(&temp_dir));

    let (status, body) = post_calculate(
        app,
        json!({"weight": 150.0, "height": 65.0, "isMetric": false}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 703 * 150 / 65^2 = 24.9586..., displayed as 25.0 but categorized
    // from the exact value
    assert_close(&body["data"]["bmi"], 25.0);
    assert_eq!(body["data"]["category"], json!("Normal weight"));
}

#[tokio::test]
async fn test_missing_is_metric_reads_as_imperial() {
    let temp_dir = setup_test_dir();
    let app = test_router(&log_path(&temp_dir));

    let (status, body) =
        post_calculate(app, json!({"weight": 150.0, "height": 65.0})).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&body["data"]["bmi"], 25.0);
}

#[tokio::test]
async fn test_invalid_inputs_rejected_without_logging() {
    let temp_dir = setup_test_dir();
    let path = log_path(&temp_dir);

    let bad_bodies = [
        json!({"weight": 0, "height": 175, "isMetric": true}),
        json!({"weight": 70, "height": -5, "isMetric": true}),
        json!({"weight": "abc", "height": 175, "isMetric": true}),
        json!({"height": 175, "isMetric": true}),
        json!({"weight": 70, "isMetric": true}),
    ];

    for body in bad_bodies {
        let (status, response) = post_calculate(test_router(&path), body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response["success"], json!(false));
        assert_eq!(
            response["message"],
            json!("Please provide valid weight and height values.")
        );
    }

    // No entry reached the log
    assert!(!path.exists());
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let temp_dir = setup_test_dir();
    let app = test_router(&log_path(&temp_dir));

    let (status, response) = send_json(app, "not json at all".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response["message"],
        json!("Please provide valid weight and height values.")
    );
}

#[tokio::test]
async fn test_history_empty_without_log_file() {
    let temp_dir = setup_test_dir();
    let app = test_router(&log_path(&temp_dir));

    let (status, body) = get_history(app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["history"], json!([]));
}

#[tokio::test]
async fn test_history_newest_first() {
    let temp_dir = setup_test_dir();
    let path = log_path(&temp_dir);

    for weight in [60.0, 70.0, 80.0] {
        let (status, _) = post_calculate(
            test_router(&path),
            json!({"weight": weight, "height": 175.0, "isMetric": true}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get_history(test_router(&path)).await;
    assert_eq!(status, StatusCode::OK);

    let history = body["history"].as_array().expect("history is an array");
    assert_eq!(history.len(), 3);
    assert!(history[0].as_str().unwrap().contains("Weight: 80.00 kg"));
    assert!(history[1].as_str().unwrap().contains("Weight: 70.00 kg"));
    assert!(history[2].as_str().unwrap().contains("Weight: 60.00 kg"));
}

#[tokio::test]
async fn test_log_line_format_on_disk() {
    let temp_dir = setup_test_dir();
    let path = log_path(&temp_dir);

    post_calculate(
        test_router(&path),
        json!({"weight": 70.0, "height": 175.0, "isMetric": true}),
    )
    .await;

    let contents = std::fs::read_to_string(&path).expect("log file exists");
    let line = contents.trim_end();
    let (timestamp, rest) = line.split_once(" - ").expect("timestamp separator");

    assert!(timestamp.contains('T'));
    assert!(timestamp.ends_with('Z'));
    assert_eq!(rest, "Weight: 70.00 kg, Height: 175.00 cm, BMI: 22.86");
}

#[tokio::test]
async fn test_save_failure_is_nonfatal() {
    let temp_dir = setup_test_dir();

    // Point the store below a regular file so the append must fail
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"").expect("Failed to create blocker file");
    let path = blocker.join("bmi_data.txt");

    let (status, body) = post_calculate(
        test_router(&path),
        json!({"weight": 70.0, "height": 175.0, "isMetric": true}),
    )
    .await;

    // The computation still succeeds in full
    assert_eq!(status, StatusCode::OK);
    assert_close(&body["data"]["bmi"], 22.9);
    assert_eq!(body["data"]["saveResult"]["success"], json!(false));
    assert!(body["data"]["saveResult"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to save data to file:"));
}
