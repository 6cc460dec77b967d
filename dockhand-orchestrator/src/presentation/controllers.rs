//! HTTP request handlers
//!
//! Handlers stay thin: check configuration, delegate to a service, translate
//! errors to HTTP responses. Background failures never surface here; they
//! are only observable through the polled status records.

use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use dockhand_core::Config;
use dockhand_core::domain::RepositoryAnalysis;
use dockhand_core::infrastructure::KeyValueStore;
use tracing::error;
use uuid::Uuid;

use crate::application::dockerization::DockerizationError;
use crate::application::{AnalysisService, DockerizationService};
use crate::domain::{AnalysisStatus, DockerizationStatus, RepoRef};
use crate::presentation::models::{
    AnalysisAccepted, AnalyzeRequest, CachedAnalysesResponse, DockerizeAccepted, DockerizeForm,
    ErrorResponse, HealthResponse,
};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<AnalysisService>,
    pub dockerization: Arc<DockerizationService>,
    pub analysis_status: Arc<dyn KeyValueStore<Uuid, AnalysisStatus>>,
    pub dockerization_status: Arc<dyn KeyValueStore<Uuid, DockerizationStatus>>,
    pub result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>>,
    pub config: Arc<Config>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// POST /analyze - Start a repository analysis task
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis task started", body = AnalysisAccepted),
        (status = 400, description = "Invalid repository URL", body = ErrorResponse),
        (status = 500, description = "Model API key not configured", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisAccepted>, ApiError> {
    if state.config.llm.resolve_api_key().is_none() {
        return Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Model API key not configured",
        ));
    }

    RepoRef::parse(&request.repo_url)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let analysis_id = state
        .analysis
        .clone()
        .start(request.repo_url, request.github_token)
        .await;

    Ok(Json(AnalysisAccepted { analysis_id }))
}

/// GET /analysis/status/{task_id} - Analysis task status
#[utoipa::path(
    get,
    path = "/analysis/status/{task_id}",
    params(("task_id" = Uuid, Path, description = "Analysis task id")),
    responses(
        (status = 200, description = "Status found", body = AnalysisStatus),
        (status = 404, description = "Task not found", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analysis_status(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> Result<Json<AnalysisStatus>, ApiError> {
    match state.analysis_status.get(&task_id).await {
        Some(status) => Ok(Json(status)),
        None => Err(api_error(StatusCode::NOT_FOUND, "Task not found")),
    }
}

/// GET /analysis/result/{task_id} - Completed analysis result
#[utoipa::path(
    get,
    path = "/analysis/result/{task_id}",
    params(("task_id" = Uuid, Path, description = "Analysis task id")),
    responses(
        (status = 200, description = "Result found", body = RepositoryAnalysis),
        (status = 404, description = "Result not cached yet", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analysis_result(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> Result<Json<RepositoryAnalysis>, ApiError> {
    match state.result_cache.get(&task_id).await {
        Some(result) => Ok(Json(result)),
        None => Err(api_error(StatusCode::NOT_FOUND, "Analysis result not found")),
    }
}

/// POST /dockerize - Start a dockerization task
#[utoipa::path(
    post,
    path = "/dockerize",
    request_body(content = DockerizeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Dockerization task started", body = DockerizeAccepted),
        (status = 404, description = "Analysis not found", body = ErrorResponse),
        (status = 500, description = "Model API key not configured", body = ErrorResponse)
    ),
    tag = "dockerization"
)]
pub async fn dockerize(
    State(state): State<AppState>,
    Form(form): Form<DockerizeForm>,
) -> Result<Json<DockerizeAccepted>, ApiError> {
    if state.result_cache.get(&form.analysis_id).await.is_none() {
        return Err(api_error(
            StatusCode::NOT_FOUND,
            "Analysis not found. Please run analysis first.",
        ));
    }

    if state.config.llm.resolve_api_key().is_none() {
        return Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Model API key not configured",
        ));
    }

    match state
        .dockerization
        .start(form.repo_url, form.github_token, form.analysis_id)
        .await
    {
        Ok(task_id) => Ok(Json(DockerizeAccepted {
            task_id,
            status: "started".to_string(),
        })),
        Err(DockerizationError::AnalysisNotFound(_)) => Err(api_error(
            StatusCode::NOT_FOUND,
            "Analysis not found. Please run analysis first.",
        )),
        Err(err) => {
            error!(error = %err, "Failed to start dockerization");
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                err.to_string(),
            ))
        }
    }
}

/// GET /status/{task_id} - Dockerization task status
#[utoipa::path(
    get,
    path = "/status/{task_id}",
    params(("task_id" = Uuid, Path, description = "Dockerization task id")),
    responses(
        (status = 200, description = "Status found", body = DockerizationStatus),
        (status = 404, description = "Task not found", body = ErrorResponse)
    ),
    tag = "dockerization"
)]
pub async fn dockerization_status(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> Result<Json<DockerizationStatus>, ApiError> {
    match state.dockerization_status.get(&task_id).await {
        Some(status) => Ok(Json(status)),
        None => Err(api_error(StatusCode::NOT_FOUND, "Task not found")),
    }
}

/// GET /health - Service health
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = HealthResponse)),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ai_configured: state.config.llm.resolve_api_key().is_some(),
        timestamp: Utc::now(),
    })
}

/// GET /debug/analyses - Diagnostic list of cached analyses
#[utoipa::path(
    get,
    path = "/debug/analyses",
    responses((status = 200, description = "Cached analysis ids", body = CachedAnalysesResponse)),
    tag = "health"
)]
pub async fn list_analyses(State(state): State<AppState>) -> Json<CachedAnalysesResponse> {
    let cached_analyses = state.result_cache.keys().await;
    let count = cached_analyses.len();
    Json(CachedAnalysesResponse {
        cached_analyses,
        count,
    })
}
