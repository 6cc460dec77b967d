//! Shared test fixtures: scripted provider/agent and app wiring

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::response::Response;
use dockhand_core::Config;
use dockhand_core::config::{GithubConfig, QueueConfig};
use dockhand_core::domain::RepositoryAnalysis;
use dockhand_core::infrastructure::{KeyValueStore, MemoryStore};
use dockhand_llm::application::use_cases::{AnalyzeRepositoryUseCase, GenerateArtifactsUseCase};
use dockhand_llm::domain::{
    CompletionRequest, CompletionResponse, LlmError, LlmProvider, StopReason, Usage,
};
use dockhand_orchestrator::application::{
    AnalysisService, DockerizationService, DockerizationWorkflow,
};
use dockhand_orchestrator::domain::{AnalysisStatus, DockerizationStatus};
use dockhand_orchestrator::infrastructure::agent::{AgentError, GithubAgent};
use dockhand_orchestrator::infrastructure::github::GitHubClient;
use dockhand_orchestrator::infrastructure::job_queue::{
    JobQueueHandle, JobWorkerContext, spawn_job_worker_pool,
};
use dockhand_orchestrator::presentation::controllers::AppState;
use dockhand_orchestrator::presentation::routes::create_router;
use http_body_util::BodyExt;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub const ANALYSIS_JSON: &str = r#"{
    "project_overview": {
        "name": "widgets",
        "description": "A widget service",
        "purpose": "Serve widgets",
        "domain": "Backend/API",
        "complexity_score": 5
    },
    "technical_architecture": {
        "technology_stack": {
            "language": "Python",
            "framework": "FastAPI",
            "runtime": "python3.12",
            "package_manager": "pip",
            "dependencies": ["fastapi", "uvicorn"]
        },
        "system_architecture": {
            "architecture_type": "Monolithic",
            "modules": ["api"],
            "key_features": ["widgets"],
            "patterns": ["REST"]
        }
    }
}"#;

/// Provider scripted by prompt content, mimicking the real model contracts.
pub struct ScriptedProvider;

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let user_prompt = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let content = if user_prompt.contains("Please analyze this repository") {
            format!("```json\n{}\n```", ANALYSIS_JSON)
        } else if user_prompt.contains("Generate a Dockerfile") {
            r#"{"content": "FROM python:3.12-slim", "explanation": "Multi-stage build"}"#.to_string()
        } else if user_prompt.contains("Generate docker-compose.yml") {
            r#"{"content": "services:\n  app: {}", "services": ["app", "redis"]}"#.to_string()
        } else if user_prompt.contains("Generate GitHub Actions workflow") {
            r#"{"content": "name: CI/CD Pipeline", "features": ["Testing"]}"#.to_string()
        } else if user_prompt.contains("Generate Kubernetes manifests") {
            r#"{"explanation": "deploy + svc", "items": [
                {"path": "k8s/deployment.yaml", "content": "kind: Deployment"},
                {"path": "k8s/service.yaml", "content": "kind: Service"}
            ]}"#
            .to_string()
        } else if user_prompt.contains("pull request description") {
            "## Summary\nThis PR dockerizes the project.".to_string()
        } else {
            return Err(LlmError::InvalidRequest(format!(
                "Unscripted prompt: {}",
                &user_prompt[..user_prompt.len().min(80)]
            )));
        };

        Ok(CompletionResponse {
            id: "resp_test".to_string(),
            model: "scripted".to_string(),
            content,
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }

    fn default_model(&self) -> &str {
        "scripted"
    }
}

/// Agent that records instructions and answers from a script.
pub struct ScriptedAgent {
    pub instructions: Mutex<Vec<String>>,
    pub fail: bool,
}

impl ScriptedAgent {
    pub fn new() -> Self {
        Self {
            instructions: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            instructions: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn recorded(&self) -> Vec<String> {
        self.instructions.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl GithubAgent for ScriptedAgent {
    async fn run(&self, _github_token: &str, instruction: &str) -> Result<String, AgentError> {
        self.instructions
            .lock()
            .expect("lock poisoned")
            .push(instruction.to_string());

        if self.fail {
            return Err(AgentError::Unavailable("agent offline".to_string()));
        }

        if instruction.contains("default branch") {
            Ok("The default branch is main.".to_string())
        } else if instruction.contains("file structure") {
            Ok("README.md\nsrc/\nrequirements.txt (fastapi, uvicorn)".to_string())
        } else if instruction.contains("Create a pull request") {
            Ok("Opened https://github.com/acme/widgets/pull/42 for you.".to_string())
        } else {
            Ok("Done.".to_string())
        }
    }
}

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub agent: Arc<ScriptedAgent>,
    pub shutdown_token: CancellationToken,
}

/// Wire the full application against scripted provider/agent fixtures.
///
/// The GitHub REST client points at an unroutable port so pull-request
/// creation exercises the agent fallback path.
pub fn build_app(config: Config, agent: Arc<ScriptedAgent>) -> TestApp {
    let config_arc = Arc::new(config.clone());
    let shutdown_token = CancellationToken::new();

    let provider: Arc<dyn LlmProvider> = Arc::new(ScriptedProvider);
    let analyze_use_case = Arc::new(AnalyzeRepositoryUseCase::new(
        provider.clone(),
        config.llm.clone(),
    ));
    let artifacts_use_case = Arc::new(GenerateArtifactsUseCase::new(
        provider.clone(),
        config.llm.clone(),
    ));

    let github_client = Arc::new(GitHubClient::from_config(&GithubConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 1,
    }));

    let analysis_status: Arc<dyn KeyValueStore<Uuid, AnalysisStatus>> =
        Arc::new(MemoryStore::new());
    let dockerization_status: Arc<dyn KeyValueStore<Uuid, DockerizationStatus>> =
        Arc::new(MemoryStore::new());
    let result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>> =
        Arc::new(MemoryStore::new());

    let (job_queue, job_receiver) = JobQueueHandle::new();
    let agent_dyn: Arc<dyn GithubAgent> = agent.clone();
    let workflow = Arc::new(DockerizationWorkflow::new(
        agent_dyn.clone(),
        artifacts_use_case,
        github_client,
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

    let analysis_service = Arc::new(AnalysisService::new(
        agent_dyn,
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

    let router = create_router(state.clone(), config_arc);

    TestApp {
        state,
        router,
        agent,
        shutdown_token,
    }
}

/// Test configuration: API key present, fast queue retries.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.llm.api_key = Some("sk-test".to_string());
    config.queue = QueueConfig {
        max_workers: 2,
        max_attempts: 2,
        backoff_initial_ms: 1,
        backoff_multiplier: 2.0,
    };
    config
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
