//! Route definitions and router setup

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use dockhand_core::Config;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dockhand_core::domain::{
    ProjectOverview, RepositoryAnalysis, SystemArchitecture, TechnicalArchitecture,
    TechnologyStack,
};

use crate::domain::entities::{
    AnalysisStatus, AnalysisTaskStatus, DockerizationStatus, DockerizationTaskStatus,
};
use crate::presentation::controllers::{
    AppState, analysis_result, analysis_status, analyze, dockerization_status, dockerize,
    health_check, list_analyses,
};
use crate::presentation::models::*;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::analyze,
        crate::presentation::controllers::analysis_status,
        crate::presentation::controllers::analysis_result,
        crate::presentation::controllers::dockerize,
        crate::presentation::controllers::dockerization_status,
        crate::presentation::controllers::health_check,
        crate::presentation::controllers::list_analyses
    ),
    components(
        schemas(
            AnalyzeRequest,
            AnalysisAccepted,
            DockerizeForm,
            DockerizeAccepted,
            HealthResponse,
            CachedAnalysesResponse,
            ErrorResponse,
            AnalysisStatus,
            AnalysisTaskStatus,
            DockerizationStatus,
            DockerizationTaskStatus,
            RepositoryAnalysis,
            ProjectOverview,
            TechnicalArchitecture,
            TechnologyStack,
            SystemArchitecture
        )
    ),
    tags(
        (name = "analysis", description = "AI repository analysis endpoints"),
        (name = "dockerization", description = "Dockerization task endpoints"),
        (name = "health", description = "Health and diagnostics endpoints")
    ),
    info(
        title = "Dockhand API",
        version = "0.1.0",
        description = "Automatically analyze and dockerize GitHub repositories using AI"
    )
)]
pub struct ApiDoc;

/// Root endpoint with API information
async fn root_handler() -> Response {
    axum::Json(serde_json::json!({
        "name": "Dockhand",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Automatically analyze and dockerize GitHub repositories using AI",
        "endpoints": {
            "analyze": "POST /analyze - AI repository analysis",
            "analysis_status": "GET /analysis/status/{task_id} - Analysis task status",
            "analysis_result": "GET /analysis/result/{task_id} - Analysis result",
            "dockerize": "POST /dockerize - AI dockerization process",
            "status": "GET /status/{task_id} - Dockerization task status",
            "health": "GET /health - Health check",
            "docs": "/docs"
        }
    }))
    .into_response()
}

/// Create the application router with the middleware stack
pub fn create_router(state: AppState, config: Arc<Config>) -> Router {
    // For credentialless JSON APIs a wildcard origin is acceptable; specific
    // origins are honored when configured.
    let cors_layer = if config.server.allowed_origins.len() == 1
        && config.server.allowed_origins[0] == "*"
    {
        CorsLayer::new()
            .allow_origin(tower_http::cors::AllowOrigin::any())
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
    } else {
        let origins: Vec<axum::http::HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                axum::http::HeaderValue::from_str(origin)
                    .map_err(|_| {
                        tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                    })
                    .ok()
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
    };

    let mut router = Router::new()
        .route("/", get(root_handler))
        .route("/analyze", post(analyze))
        .route("/analysis/status/{task_id}", get(analysis_status))
        .route("/analysis/result/{task_id}", get(analysis_result))
        .route("/dockerize", post(dockerize))
        .route("/status/{task_id}", get(dockerization_status))
        .route("/health", get(health_check))
        .route("/debug/analyses", get(list_analyses));

    // Avoid leaking interactive docs in hardened deployments.
    if config.server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_seconds),
        ));

    router.layer(service_builder).with_state(state)
}
