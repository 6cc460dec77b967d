//! Docker, CI/CD, and Kubernetes artifact generation

use std::sync::Arc;

use dockhand_core::config::LlmConfig;
use dockhand_core::domain::RepositoryAnalysis;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{
    ComposeContent, CompletionRequest, DockerfileContent, KubernetesManifests, LlmError,
    LlmProvider, WorkflowContent,
};
use crate::infrastructure::prompts::PromptBuilder;
use crate::infrastructure::prompts::templates::{
    COMPOSE_SYSTEM_PROMPT, DOCKERFILE_SYSTEM_PROMPT, KUBERNETES_SYSTEM_PROMPT,
    PR_DESCRIPTION_SYSTEM_PROMPT, WORKFLOW_SYSTEM_PROMPT,
};
use crate::infrastructure::response_parser::ResponseParser;

/// Generate dockerization artifacts from a completed analysis.
///
/// Generation responses go through the tolerant extraction chain: model
/// output for these calls is frequently fenced or lightly malformed, and a
/// recoverable document beats a failed job.
pub struct GenerateArtifactsUseCase {
    provider: Arc<dyn LlmProvider>,
    config: LlmConfig,
}

impl GenerateArtifactsUseCase {
    pub fn new(provider: Arc<dyn LlmProvider>, config: LlmConfig) -> Self {
        Self { provider, config }
    }

    pub async fn dockerfile(
        &self,
        analysis: &RepositoryAnalysis,
    ) -> Result<DockerfileContent, LlmError> {
        self.generate(
            DOCKERFILE_SYSTEM_PROMPT,
            PromptBuilder::build_dockerfile_prompt(analysis),
        )
        .await
    }

    pub async fn docker_compose(
        &self,
        analysis: &RepositoryAnalysis,
    ) -> Result<ComposeContent, LlmError> {
        self.generate(
            COMPOSE_SYSTEM_PROMPT,
            PromptBuilder::build_compose_prompt(analysis),
        )
        .await
    }

    pub async fn github_workflow(
        &self,
        analysis: &RepositoryAnalysis,
    ) -> Result<WorkflowContent, LlmError> {
        self.generate(
            WORKFLOW_SYSTEM_PROMPT,
            PromptBuilder::build_workflow_prompt(analysis),
        )
        .await
    }

    pub async fn kubernetes_configs(
        &self,
        analysis: &RepositoryAnalysis,
    ) -> Result<KubernetesManifests, LlmError> {
        self.generate(
            KUBERNETES_SYSTEM_PROMPT,
            PromptBuilder::build_kubernetes_prompt(analysis),
        )
        .await
    }

    /// Plain-text PR description; no JSON contract here.
    pub async fn pull_request_description(
        &self,
        analysis: &RepositoryAnalysis,
    ) -> Result<String, LlmError> {
        let response = self
            .provider
            .complete(self.request(
                PR_DESCRIPTION_SYSTEM_PROMPT,
                PromptBuilder::build_pr_description_prompt(analysis),
            ))
            .await?;

        let text = response.text().trim().to_string();
        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Model returned empty content".to_string(),
            ));
        }
        Ok(text)
    }

    async fn generate<T: DeserializeOwned>(
        &self,
        system: &str,
        user: String,
    ) -> Result<T, LlmError> {
        let response = self.provider.complete(self.request(system, user)).await?;
        debug!(model = %response.model, truncated = response.is_truncated(), "Received generation response");
        ResponseParser::extract_json(response.text())
    }

    fn request(&self, system: &str, user: String) -> CompletionRequest {
        CompletionRequest::new()
            .with_system(system)
            .with_user(user)
            .with_model(&self.config.model)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens)
    }
}
