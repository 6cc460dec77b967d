//! LLM provider implementations

mod openai;

use std::sync::Arc;
use std::time::Duration;

use dockhand_core::config::LlmConfig;

pub use openai::OpenAIProvider;

use crate::domain::{LlmError, LlmProvider};

/// Build the active provider from configuration.
///
/// A missing API key is tolerated here: request handlers refuse analysis
/// work until a key is configured, so an unauthenticated provider is never
/// actually invoked.
pub fn provider_from_config(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match config.provider.to_lowercase().as_str() {
        "openai" | "openrouter" | "gpt" => {
            let api_key = config.resolve_api_key().unwrap_or_default();
            let mut provider = OpenAIProvider::new(api_key, &config.model)
                .with_timeout(Duration::from_secs(config.timeout_seconds));
            if !config.base_url.trim().is_empty() {
                provider = provider.with_base_url(&config.base_url);
            }
            Ok(Arc::new(provider))
        }
        other => Err(LlmError::Configuration(format!(
            "Unknown provider: {}. Valid options: openai, openrouter",
            other
        ))),
    }
}
