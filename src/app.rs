//! Application setup and wiring

use std::sync::Arc;

use axum::Router;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use uuid::Uuid;

use dockhand_core::Config;
use dockhand_core::domain::RepositoryAnalysis;
use dockhand_core::infrastructure::{KeyValueStore, MemoryStore};
use dockhand_llm::application::use_cases::{AnalyzeRepositoryUseCase, GenerateArtifactsUseCase};
use dockhand_llm::infrastructure::providers::provider_from_config;
use dockhand_orchestrator::application::{
    AnalysisService, DockerizationService, DockerizationWorkflow,
};
use dockhand_orchestrator::domain::{AnalysisStatus, DockerizationStatus};
use dockhand_orchestrator::infrastructure::agent::{GithubAgent, McpAgentClient};
use dockhand_orchestrator::infrastructure::github::GitHubClient;
use dockhand_orchestrator::infrastructure::job_queue::{
    JobQueueHandle, JobWorkerContext, spawn_job_worker_pool,
};
use dockhand_orchestrator::presentation::controllers::AppState;
use dockhand_orchestrator::presentation::routes::create_router;

/// Handle returned from create_app for graceful shutdown coordination
pub struct AppHandle {
    pub router: Router,
    pub shutdown_token: CancellationToken,
}

/// Create the application router and return an AppHandle for shutdown
/// coordination
pub async fn create_app(
    config: Config,
) -> Result<AppHandle, Box<dyn std::error::Error + Send + Sync>> {
    let config_arc = Arc::new(config.clone());
    let shutdown_token = CancellationToken::new();

    if config.llm.resolve_api_key().is_none() {
        warn!("Model API key not configured; analysis endpoints will reject requests");
    }

    // LLM provider and use cases
    let provider = provider_from_config(&config.llm)?;
    let analyze_use_case = Arc::new(AnalyzeRepositoryUseCase::new(
        provider.clone(),
        config.llm.clone(),
    ));
    let artifacts_use_case = Arc::new(GenerateArtifactsUseCase::new(
        provider.clone(),
        config.llm.clone(),
    ));

    // External clients
    let agent: Arc<dyn GithubAgent> = Arc::new(McpAgentClient::from_config(&config.agent));
    let github_client = Arc::new(GitHubClient::from_config(&config.github));

    // Process-lifetime stores; cleared only by restart
    let analysis_status: Arc<dyn KeyValueStore<Uuid, AnalysisStatus>> =
        Arc::new(MemoryStore::new());
    let dockerization_status: Arc<dyn KeyValueStore<Uuid, DockerizationStatus>> =
        Arc::new(MemoryStore::new());
    let result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>> =
        Arc::new(MemoryStore::new());

    // Background job queue and worker pool
    let (job_queue, job_receiver) = JobQueueHandle::new();
    let workflow = Arc::new(DockerizationWorkflow::new(
        agent.clone(),
        artifacts_use_case.clone(),
        github_client.clone(),
        result_cache.clone(),
        dockerization_status.clone(),
    ));
    spawn_job_worker_pool(
        JobWorkerContext {
            workflow,
            queue: config.queue.clone(),
        },
        job_receiver,
        shutdown_token.clone(),
    );

    // Services
    let analysis_service = Arc::new(AnalysisService::new(
        agent.clone(),
        analyze_use_case,
        analysis_status.clone(),
        result_cache.clone(),
    ));
    let dockerization_service = Arc::new(DockerizationService::new(
        result_cache.clone(),
        dockerization_status.clone(),
        job_queue,
    ));

    let state = AppState {
        analysis: analysis_service,
        dockerization: dockerization_service,
        analysis_status,
        dockerization_status,
        result_cache,
        config: config_arc.clone(),
    };

    let router = create_router(state, config_arc);

    Ok(AppHandle {
        router,
        shutdown_token,
    })
}
