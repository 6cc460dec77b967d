//! External natural-language GitHub tool agent
//!
//! The agent accepts a natural-language instruction, decides which GitHub
//! tools to call, and returns a textual result. What it fetched or changed is
//! only knowable from that text, which is why the [`heuristics`] module
//! exists.

pub mod client;
pub mod heuristics;
pub mod instructions;

pub use client::McpAgentClient;

use async_trait::async_trait;

/// Interface to the external tool-calling agent.
///
/// Object-safe so workflows can run against a scripted agent in tests.
#[async_trait]
pub trait GithubAgent: Send + Sync {
    /// Run a single natural-language instruction on behalf of the holder of
    /// `github_token`, returning the agent's textual result.
    async fn run(&self, github_token: &str, instruction: &str) -> Result<String, AgentError>;
}

/// Agent invocation error
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Agent request failed: {0}")]
    Http(String),

    #[error("Agent service unavailable: {0}")]
    Unavailable(String),

    #[error("Agent returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            AgentError::Unavailable(err.to_string())
        } else {
            AgentError::Http(err.to_string())
        }
    }
}
