//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request model for repository analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// GitHub repository URL
    #[schema(example = "https://github.com/acme/widgets")]
    pub repo_url: String,

    /// Personal access token used for repository access
    #[schema(example = "ghp_abc123...")]
    pub github_token: String,
}

/// Response model for analysis task creation
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisAccepted {
    /// Task id to poll and later pass to /dockerize
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub analysis_id: Uuid,
}

/// Form model for dockerization requests
#[derive(Debug, Deserialize, ToSchema)]
pub struct DockerizeForm {
    #[schema(example = "https://github.com/acme/widgets")]
    pub repo_url: String,

    #[schema(example = "ghp_abc123...")]
    pub github_token: String,

    /// Id of a completed analysis
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub analysis_id: Uuid,
}

/// Response model for dockerization task creation
#[derive(Debug, Serialize, ToSchema)]
pub struct DockerizeAccepted {
    pub task_id: Uuid,

    #[schema(example = "started")]
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,

    /// Whether a model API key is configured
    pub ai_configured: bool,

    pub timestamp: DateTime<Utc>,
}

/// Diagnostic list of cached analyses
#[derive(Debug, Serialize, ToSchema)]
pub struct CachedAnalysesResponse {
    pub cached_analyses: Vec<Uuid>,
    pub count: usize,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Task not found")]
    pub error: String,
}
