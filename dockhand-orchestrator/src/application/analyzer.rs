//! Repository analysis service
//!
//! The HTTP handler only creates the task record; everything else happens in
//! a spawned background task whose outcome is observable solely through the
//! status store.

use std::sync::Arc;

use dockhand_core::domain::RepositoryAnalysis;
use dockhand_core::infrastructure::KeyValueStore;
use dockhand_llm::application::use_cases::AnalyzeRepositoryUseCase;
use dockhand_llm::domain::LlmError;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{AnalysisStatus, AnalysisTaskStatus, InvalidRepoUrl, RepoRef};
use crate::infrastructure::agent::{AgentError, GithubAgent, instructions};

/// Error surfaced by the background analysis task
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidRepoUrl),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Drives repository analysis tasks
pub struct AnalysisService {
    agent: Arc<dyn GithubAgent>,
    analyze: Arc<AnalyzeRepositoryUseCase>,
    status_store: Arc<dyn KeyValueStore<Uuid, AnalysisStatus>>,
    result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>>,
}

impl AnalysisService {
    pub fn new(
        agent: Arc<dyn GithubAgent>,
        analyze: Arc<AnalyzeRepositoryUseCase>,
        status_store: Arc<dyn KeyValueStore<Uuid, AnalysisStatus>>,
        result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>>,
    ) -> Self {
        Self {
            agent,
            analyze,
            status_store,
            result_cache,
        }
    }

    /// Start an analysis task, returning its id immediately.
    ///
    /// The returned id always resolves to an `initializing` status record
    /// before any further transition.
    pub async fn start(self: Arc<Self>, repo_url: String, github_token: String) -> Uuid {
        let task_id = Uuid::new_v4();
        self.status_store
            .set(task_id, AnalysisStatus::initializing(task_id))
            .await;

        tokio::spawn(async move {
            self.run(task_id, repo_url, github_token).await;
        });

        task_id
    }

    async fn run(&self, task_id: Uuid, repo_url: String, github_token: String) {
        if let Err(err) = self.run_inner(task_id, &repo_url, &github_token).await {
            warn!(task_id = %task_id, error = %err, "Repository analysis failed");
            if let Some(current) = self.status_store.get(&task_id).await {
                self.status_store
                    .set(task_id, current.failed(err.to_string()))
                    .await;
            }
        }
    }

    async fn run_inner(
        &self,
        task_id: Uuid,
        repo_url: &str,
        github_token: &str,
    ) -> Result<(), AnalysisError> {
        let mut status = AnalysisStatus::initializing(task_id);

        let repo = RepoRef::parse(repo_url)?;
        status = status.advanced(
            AnalysisTaskStatus::ParsingUrl,
            "Parsing repository URL...",
            15,
        );
        self.status_store.set(task_id, status.clone()).await;

        status = status.advanced(
            AnalysisTaskStatus::FetchingRepo,
            "Fetching repository structure...",
            35,
        );
        self.status_store.set(task_id, status.clone()).await;

        let structure = self
            .agent
            .run(github_token, &instructions::fetch_repository_structure(&repo))
            .await?;

        status = status.advanced(
            AnalysisTaskStatus::LlmAnalysis,
            "Running AI analysis...",
            70,
        );
        self.status_store.set(task_id, status.clone()).await;

        // The agent responds with one text blob; key-file contents are part
        // of it rather than a separate document.
        let mut analysis = self.analyze.execute(&structure, "{}", &repo.repo).await?;

        // Results are cached under the task id so one identifier works for
        // both polling and retrieval.
        analysis.analysis_id = task_id;
        self.result_cache.set(task_id, analysis).await;

        self.status_store.set(task_id, status.completed()).await;
        info!(task_id = %task_id, repo = %repo, "Repository analysis completed");

        Ok(())
    }
}
