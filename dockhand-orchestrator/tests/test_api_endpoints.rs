//! Integration tests for the HTTP surface

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{ScriptedAgent, body_json, build_app, test_config};
use tower::util::ServiceExt;
use uuid::Uuid;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

#[tokio::test]
async fn test_root_reports_service_info() {
    let app = build_app(test_config(), Arc::new(ScriptedAgent::new()));

    let response = app.router.oneshot(get("/")).await.expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Dockhand");
    assert!(body["endpoints"]["analyze"].is_string());
}

#[tokio::test]
async fn test_health_reports_ai_configured() {
    let app = build_app(test_config(), Arc::new(ScriptedAgent::new()));

    let response = app
        .router
        .oneshot(get("/health"))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ai_configured"], true);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_analysis_status_is_404() {
    let app = build_app(test_config(), Arc::new(ScriptedAgent::new()));

    let response = app
        .router
        .oneshot(get(&format!("/analysis/status/{}", Uuid::new_v4())))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Task not found");
}

#[tokio::test]
async fn test_unknown_analysis_result_is_404() {
    let app = build_app(test_config(), Arc::new(ScriptedAgent::new()));

    let response = app
        .router
        .oneshot(get(&format!("/analysis/result/{}", Uuid::new_v4())))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_dockerization_status_is_404() {
    let app = build_app(test_config(), Arc::new(ScriptedAgent::new()));

    let response = app
        .router
        .oneshot(get(&format!("/status/{}", Uuid::new_v4())))
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_rejects_invalid_repo_url() {
    let app = build_app(test_config(), Arc::new(ScriptedAgent::new()));

    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"repo_url": "https://example.com/not-github", "github_token": "ghp_x"}"#,
        ))
        .expect("request should build");

    let response = app.router.oneshot(request).await.expect("request should succeed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .contains("Invalid GitHub repository URL")
    );
}

#[tokio::test]
async fn test_dockerize_without_cached_analysis_is_404() {
    let app = build_app(test_config(), Arc::new(ScriptedAgent::new()));

    let form = format!(
        "repo_url=https%3A%2F%2Fgithub.com%2Facme%2Fwidgets&github_token=ghp_x&analysis_id={}",
        Uuid::new_v4()
    );
    let request = Request::builder()
        .method("POST")
        .uri("/dockerize")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .expect("request should build");

    let response = app.router.oneshot(request).await.expect("request should succeed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Analysis not found. Please run analysis first.");
}

#[tokio::test]
async fn test_analyze_without_api_key_is_500() {
    // Only meaningful when the environment does not provide a key either.
    if std::env::var("OPENROUTER_API_KEY").is_ok() || std::env::var("OPENAI_API_KEY").is_ok() {
        return;
    }

    let mut config = test_config();
    config.llm.api_key = None;
    let app = build_app(config, Arc::new(ScriptedAgent::new()));

    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"repo_url": "https://github.com/acme/widgets", "github_token": "ghp_x"}"#,
        ))
        .expect("request should build");

    let response = app.router.oneshot(request).await.expect("request should succeed");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Model API key not configured");
}
