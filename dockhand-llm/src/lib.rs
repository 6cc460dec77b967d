//! Dockhand LLM - provider abstraction and analysis/generation use cases
//!
//! Wraps an OpenAI-compatible chat-completion endpoint behind the
//! [`LlmProvider`] trait and exposes the use cases the orchestrator drives:
//! repository analysis and Docker/CI/Kubernetes artifact generation.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::{AnalyzeRepositoryUseCase, GenerateArtifactsUseCase};
pub use domain::*;
pub use infrastructure::prompts;
pub use infrastructure::providers::{OpenAIProvider, provider_from_config};
pub use infrastructure::response_parser::ResponseParser;
