//! Dockerization service and workflow
//!
//! The service validates and enqueues; the workflow is what the background
//! worker actually runs. The workflow is a linear state machine with fixed
//! progress checkpoints; failed is reachable from every state and resets
//! progress to 0.

use std::sync::Arc;

use dockhand_core::domain::RepositoryAnalysis;
use dockhand_core::infrastructure::KeyValueStore;
use dockhand_llm::application::use_cases::GenerateArtifactsUseCase;
use dockhand_llm::domain::LlmError;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{DockerizationStatus, DockerizationTaskStatus, InvalidRepoUrl, RepoRef};
use crate::infrastructure::agent::{AgentError, GithubAgent, heuristics, instructions};
use crate::infrastructure::github::{CreatePullRequest, GitHubClient};
use crate::infrastructure::job_queue::{JobQueueError, JobQueueHandle, QueuedDockerizationJob};

/// Error returned when a dockerization request cannot be accepted
#[derive(Debug, thiserror::Error)]
pub enum DockerizationError {
    #[error("Analysis not found: {0}")]
    AnalysisNotFound(Uuid),

    #[error(transparent)]
    Queue(#[from] JobQueueError),
}

/// Error surfaced while executing the dockerization workflow
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidRepoUrl),

    #[error("Analysis not found: {0}")]
    AnalysisNotFound(Uuid),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Accepts dockerization requests and hands them to the job queue
pub struct DockerizationService {
    result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>>,
    status_store: Arc<dyn KeyValueStore<Uuid, DockerizationStatus>>,
    queue: JobQueueHandle,
}

impl DockerizationService {
    pub fn new(
        result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>>,
        status_store: Arc<dyn KeyValueStore<Uuid, DockerizationStatus>>,
        queue: JobQueueHandle,
    ) -> Self {
        Self {
            result_cache,
            status_store,
            queue,
        }
    }

    /// Queue a dockerization job. Requires a cached analysis for
    /// `analysis_id`.
    pub async fn start(
        &self,
        repo_url: String,
        github_token: String,
        analysis_id: Uuid,
    ) -> Result<Uuid, DockerizationError> {
        if self.result_cache.get(&analysis_id).await.is_none() {
            return Err(DockerizationError::AnalysisNotFound(analysis_id));
        }

        let task_id = Uuid::new_v4();
        self.status_store
            .set(task_id, DockerizationStatus::queued(task_id))
            .await;

        self.queue.enqueue(QueuedDockerizationJob {
            task_id,
            repo_url,
            github_token,
            analysis_id,
        })?;

        info!(task_id = %task_id, analysis_id = %analysis_id, "Dockerization job queued");
        Ok(task_id)
    }
}

/// Executes a queued dockerization job end to end
pub struct DockerizationWorkflow {
    agent: Arc<dyn GithubAgent>,
    artifacts: Arc<GenerateArtifactsUseCase>,
    github: Arc<GitHubClient>,
    result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>>,
    status_store: Arc<dyn KeyValueStore<Uuid, DockerizationStatus>>,
}

impl DockerizationWorkflow {
    pub fn new(
        agent: Arc<dyn GithubAgent>,
        artifacts: Arc<GenerateArtifactsUseCase>,
        github: Arc<GitHubClient>,
        result_cache: Arc<dyn KeyValueStore<Uuid, RepositoryAnalysis>>,
        status_store: Arc<dyn KeyValueStore<Uuid, DockerizationStatus>>,
    ) -> Self {
        Self {
            agent,
            artifacts,
            github,
            result_cache,
            status_store,
        }
    }

    /// Run the job, recording the terminal status either way.
    ///
    /// There is no checkpointing: a retried job starts over from the first
    /// step.
    pub async fn execute(&self, job: &QueuedDockerizationJob) -> Result<String, WorkflowError> {
        match self.run_steps(job).await {
            Ok(pr_url) => {
                self.update(job.task_id, |status| status.completed(pr_url.as_str()))
                    .await;
                Ok(pr_url)
            }
            Err(err) => {
                self.update(job.task_id, |status| status.failed(err.to_string()))
                    .await;
                Err(err)
            }
        }
    }

    async fn run_steps(&self, job: &QueuedDockerizationJob) -> Result<String, WorkflowError> {
        let token = &job.github_token;

        self.checkpoint(
            job.task_id,
            DockerizationTaskStatus::Analyzing,
            "AI analyzing repository structure...",
            10,
        )
        .await;

        let analysis = self
            .result_cache
            .get(&job.analysis_id)
            .await
            .ok_or(WorkflowError::AnalysisNotFound(job.analysis_id))?;
        let repo = RepoRef::parse(&job.repo_url)?;

        self.checkpoint(
            job.task_id,
            DockerizationTaskStatus::CreatingBranch,
            "Creating feature branch...",
            20,
        )
        .await;

        let base = self.detect_default_branch(token, &repo).await;
        let branch = self.create_branch(token, &repo, &base).await?;

        self.checkpoint(
            job.task_id,
            DockerizationTaskStatus::Dockerizing,
            "AI generating Docker configuration...",
            40,
        )
        .await;

        let dockerfile = self.artifacts.dockerfile(&analysis).await?;
        self.commit_file(
            token,
            &repo,
            &branch,
            "Dockerfile",
            &dockerfile.content,
            instructions::DOCKERFILE_COMMIT_MESSAGE,
        )
        .await?;

        let compose = self.artifacts.docker_compose(&analysis).await?;
        self.commit_file(
            token,
            &repo,
            &branch,
            "docker-compose.yml",
            &compose.content,
            instructions::COMPOSE_COMMIT_MESSAGE,
        )
        .await?;

        self.checkpoint(
            job.task_id,
            DockerizationTaskStatus::CreatingWorkflow,
            "AI setting up CI/CD pipeline...",
            70,
        )
        .await;

        let workflow = self.artifacts.github_workflow(&analysis).await?;
        self.commit_file(
            token,
            &repo,
            &branch,
            ".github/workflows/ci-cd.yml",
            &workflow.content,
            instructions::WORKFLOW_COMMIT_MESSAGE,
        )
        .await?;

        self.checkpoint(
            job.task_id,
            DockerizationTaskStatus::CreatingK8s,
            "AI generating Kubernetes manifests...",
            80,
        )
        .await;

        let manifests = self.artifacts.kubernetes_configs(&analysis).await?;
        for item in &manifests.items {
            self.commit_file(
                token,
                &repo,
                &branch,
                &item.path,
                &item.content,
                instructions::KUBERNETES_COMMIT_MESSAGE,
            )
            .await?;
        }

        self.checkpoint(
            job.task_id,
            DockerizationTaskStatus::CreatingPr,
            "AI creating pull request...",
            90,
        )
        .await;

        let pr_url = self
            .open_pull_request(token, &repo, &branch, &base, &analysis)
            .await?;

        Ok(pr_url)
    }

    /// Default branch detection is best-effort and never fails the job.
    async fn detect_default_branch(&self, token: &str, repo: &RepoRef) -> String {
        match self
            .agent
            .run(token, &instructions::default_branch_query(repo))
            .await
        {
            Ok(output) => heuristics::branch_from_agent_output(&output).to_string(),
            Err(err) => {
                warn!(repo = %repo, error = %err, "Default branch detection failed, assuming 'main'");
                "main".to_string()
            }
        }
    }

    async fn create_branch(
        &self,
        token: &str,
        repo: &RepoRef,
        base: &str,
    ) -> Result<String, WorkflowError> {
        let suffix = Uuid::new_v4().simple().to_string();
        let branch = format!("feature/dockerize-and-ci-{}", &suffix[..8]);

        self.agent
            .run(token, &instructions::create_branch(repo, &branch, base))
            .await?;

        Ok(branch)
    }

    async fn commit_file(
        &self,
        token: &str,
        repo: &RepoRef,
        branch: &str,
        path: &str,
        content: &str,
        commit_message: &str,
    ) -> Result<(), WorkflowError> {
        self.agent
            .run(
                token,
                &instructions::commit_file(repo, branch, path, content, commit_message),
            )
            .await?;
        info!(repo = %repo, branch, path, "Committed generated file");
        Ok(())
    }

    /// REST first; on failure, ask the agent and recover the URL from its
    /// prose. The repository's `/pulls` listing is the last-resort URL.
    async fn open_pull_request(
        &self,
        token: &str,
        repo: &RepoRef,
        head: &str,
        base: &str,
        analysis: &RepositoryAnalysis,
    ) -> Result<String, WorkflowError> {
        let description = self.artifacts.pull_request_description(analysis).await?;
        let title = pull_request_title(analysis);
        let body = pull_request_body(&description, analysis);

        let request = CreatePullRequest {
            title: title.clone(),
            head: head.to_string(),
            base: base.to_string(),
            body: body.clone(),
        };

        match self.github.create_pull_request(token, repo, &request).await {
            Ok(pull_request) => Ok(pull_request.html_url),
            Err(err) => {
                warn!(repo = %repo, error = %err, "REST pull request creation failed, falling back to agent");
                let output = self
                    .agent
                    .run(
                        token,
                        &instructions::create_pull_request(repo, &title, head, base, &body),
                    )
                    .await?;

                Ok(heuristics::extract_pull_request_url(&output)
                    .unwrap_or_else(|| format!("https://github.com/{}/pulls", repo.slug())))
            }
        }
    }

    async fn checkpoint(
        &self,
        task_id: Uuid,
        status: DockerizationTaskStatus,
        message: &str,
        progress: u8,
    ) {
        self.update(task_id, |current| {
            current.advanced(status, message, progress)
        })
        .await;
    }

    async fn update(
        &self,
        task_id: Uuid,
        transition: impl FnOnce(&DockerizationStatus) -> DockerizationStatus,
    ) {
        let current = self
            .status_store
            .get(&task_id)
            .await
            .unwrap_or_else(|| DockerizationStatus::queued(task_id));
        self.status_store.set(task_id, transition(&current)).await;
    }
}

fn pull_request_title(analysis: &RepositoryAnalysis) -> String {
    format!(
        "🐳 feat: Add AI-powered Docker support and CI/CD pipeline for {}",
        analysis.project_overview.name
    )
}

fn pull_request_body(description: &str, analysis: &RepositoryAnalysis) -> String {
    let overview = &analysis.project_overview;
    let stack = &analysis.technical_architecture.technology_stack;

    format!(
        r#"## 🚀 AI-Powered Dockerization and CI/CD Implementation

{description}

### 📊 Project Analysis
- **Name:** {name}
- **Purpose:** {purpose}
- **Domain:** {domain}
- **Language:** {language}
- **Framework:** {framework}
- **Complexity:** {complexity}/10

### 🤖 AI-Generated Assets
- ✅ **Intelligent Dockerfile** - Multi-stage, security-optimized
- ✅ **Smart docker-compose.yml** - Service orchestration
- ✅ **Advanced CI/CD workflow** - Complete automation pipeline
- ✅ **Kubernetes manifests** - Ready-to-apply deployment

---
*This PR was automatically generated by the Dockhand dockerization agent*"#,
        description = description,
        name = overview.name,
        purpose = overview.purpose,
        domain = overview.domain.as_deref().unwrap_or("General Software"),
        language = stack.language,
        framework = stack.framework.as_deref().unwrap_or("N/A"),
        complexity = overview.complexity_score,
    )
}
