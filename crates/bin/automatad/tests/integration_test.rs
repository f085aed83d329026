//! End-to-end smoke tests for the full automatad stack.
//!
//! Each test spins up the complete application (real catalog, real service,
//! real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound. The artificial
//! pause is disabled so the suite stays fast.

use automata_adapter_http_axum::router;
use automata_adapter_http_axum::state::AppState;
use automata_app::chance::ThreadRngSampler;
use automata_app::latency::NoDelay;
use automata_app::services::task_service::TaskService;
use automata_domain::intent::IntentCatalog;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a fully-wired router with the artificial pause disabled.
fn app() -> axum::Router {
    let service = TaskService::new(IntentCatalog::builtin(), ThreadRngSampler, NoDelay);
    router::build(AppState::new(service))
}

/// POST a raw JSON body to the submit endpoint and decode the response.
async fn submit(body: &'static str) -> (StatusCode, serde_json::Value) {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/automata")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = resp.status();
    let json: serde_json::Value =
        serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_classify_security_audit_task() {
    let (status, json) = submit(r#"{"task":"run security audit on staging"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "completed");
    assert_eq!(json["detected_intent"], "security_audit");
    assert_eq!(
        json["suggested_actions"],
        serde_json::json!([
            "scan dependency graph",
            "evaluate access policies",
            "generate compliance report"
        ])
    );
}

#[tokio::test]
async fn should_fall_back_to_general_automation() {
    let (status, json) = submit(r#"{"task":"write a poem"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["detected_intent"], "general_automation");
    assert_eq!(
        json["summary"],
        "Automation pipeline executed successfully. Task classified and routed."
    );
}

#[tokio::test]
async fn should_match_keywords_case_insensitively() {
    let (status, json) = submit(r#"{"task":"DATA pipeline"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["detected_intent"], "data_analysis");
}

#[tokio::test]
async fn should_prefer_earlier_rule_when_multiple_keywords_present() {
    let (status, json) = submit(r#"{"task":"deploy the new data warehouse"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["detected_intent"], "data_analysis");
}

#[tokio::test]
async fn should_return_confidence_within_bounds_and_two_decimals() {
    for _ in 0..25 {
        let (status, json) = submit(r#"{"task":"monitor the cluster"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let confidence = json["confidence"].as_f64().unwrap();
        assert!(confidence >= 0.82);
        assert!(confidence <= 0.97);
        let cents = confidence * 100.0;
        assert!((cents - cents.round()).abs() < 1e-9);
    }
}

// ---------------------------------------------------------------------------
// API: rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_whitespace_only_task() {
    let (status, json) = submit(r#"{"task":"   "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("'task'"));
}

#[tokio::test]
async fn should_reject_missing_task_field() {
    let (status, json) = submit(r"{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_non_string_task() {
    let (status, json) = submit(r#"{"task":42}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("'task'"));
}

#[tokio::test]
async fn should_reject_malformed_body() {
    let (status, json) = submit("not json at all").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body.");
}

#[tokio::test]
async fn should_reject_wrong_top_level_shape() {
    let (status, json) = submit(r"[1,2,3]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body.");
}

// ---------------------------------------------------------------------------
// Console (SSR) page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_console_page() {
    let resp = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    assert!(html.contains("Automata Console"));
}

#[tokio::test]
async fn should_render_report_after_console_submission() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("task=deploy+the+release"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    assert!(html.contains("deployment_orchestration"));
    assert!(html.contains("execute staged rollout"));
}

#[tokio::test]
async fn should_render_error_for_blank_console_submission() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("task=++"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    assert!(html.contains("is required and must be a non-empty string"));
}
