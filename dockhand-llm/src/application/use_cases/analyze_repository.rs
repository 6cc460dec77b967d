//! Repository intelligence analysis

use std::sync::Arc;

use dockhand_core::config::LlmConfig;
use dockhand_core::domain::{AnalysisPayload, RepositoryAnalysis};
use tracing::debug;

use crate::domain::{CompletionRequest, LlmError, LlmProvider};
use crate::infrastructure::prompts::PromptBuilder;
use crate::infrastructure::prompts::templates::ANALYSIS_SYSTEM_PROMPT;
use crate::infrastructure::response_parser::ResponseParser;

/// Extract a structured [`RepositoryAnalysis`] from raw repository text.
///
/// The model is instructed to return JSON only; parsing is strict (fence
/// stripping, then a direct parse). A malformed document fails the analysis
/// rather than being patched up.
pub struct AnalyzeRepositoryUseCase {
    provider: Arc<dyn LlmProvider>,
    config: LlmConfig,
}

impl AnalyzeRepositoryUseCase {
    pub fn new(provider: Arc<dyn LlmProvider>, config: LlmConfig) -> Self {
        Self { provider, config }
    }

    pub async fn execute(
        &self,
        structure: &str,
        file_contents: &str,
        repo_name: &str,
    ) -> Result<RepositoryAnalysis, LlmError> {
        let request = CompletionRequest::new()
            .with_system(ANALYSIS_SYSTEM_PROMPT)
            .with_user(PromptBuilder::build_analysis_prompt(
                repo_name,
                structure,
                file_contents,
            ))
            .with_model(&self.config.model)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        let response = self.provider.complete(request).await?;
        debug!(repo_name, model = %response.model, "Received repository analysis response");

        let payload: AnalysisPayload = ResponseParser::parse_json(response.text())?;
        Ok(RepositoryAnalysis::from_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompletionResponse, StopReason, Usage};
    use async_trait::async_trait;

    struct CannedProvider {
        content: String,
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                id: "resp_1".to_string(),
                model: "test".to_string(),
                content: self.content.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            })
        }

        fn default_model(&self) -> &str {
            "test"
        }
    }

    const ANALYSIS_JSON: &str = r#"{
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
                "dependencies": ["fastapi"]
            },
            "system_architecture": {
                "architecture_type": "Monolithic",
                "modules": ["api"],
                "key_features": ["widgets"],
                "patterns": []
            }
        }
    }"#;

    fn use_case(content: &str) -> AnalyzeRepositoryUseCase {
        AnalyzeRepositoryUseCase::new(
            Arc::new(CannedProvider {
                content: content.to_string(),
            }),
            LlmConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_execute_parses_model_json() {
        let analysis = use_case(ANALYSIS_JSON)
            .execute("src/", "{}", "widgets")
            .await
            .expect("analysis should parse");

        assert_eq!(analysis.project_overview.name, "widgets");
        assert_eq!(
            analysis.technical_architecture.technology_stack.language,
            "Python"
        );
    }

    #[tokio::test]
    async fn test_execute_accepts_fenced_json() {
        let fenced = format!("```json\n{}\n```", ANALYSIS_JSON);
        let analysis = use_case(&fenced)
            .execute("src/", "{}", "widgets")
            .await
            .expect("fenced analysis should parse");
        assert_eq!(analysis.project_overview.complexity_score, 5);
    }

    #[tokio::test]
    async fn test_execute_rejects_empty_response() {
        let result = use_case("").execute("src/", "{}", "widgets").await;
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_execute_rejects_invalid_json() {
        let result = use_case("the repo looks great")
            .execute("src/", "{}", "widgets")
            .await;
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }
}
