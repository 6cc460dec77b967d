//! LLM Provider trait

use async_trait::async_trait;

use crate::domain::error::LlmError;
use crate::domain::messages::{CompletionRequest, CompletionResponse};

/// Core trait for LLM providers
///
/// The trait is object-safe and used with dynamic dispatch via
/// `Arc<dyn LlmProvider>`, which is what lets the use cases run against a
/// mock in tests.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Get the default model for this provider
    fn default_model(&self) -> &str;

    /// Check if the provider is healthy and can accept requests
    async fn health_check(&self) -> Result<(), LlmError> {
        // Default implementation: try a minimal completion
        let request = CompletionRequest::new().with_user("ping").with_max_tokens(1);

        self.complete(request).await.map(|_| ())
    }
}
