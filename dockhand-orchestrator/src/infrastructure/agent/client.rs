//! HTTP client for the external agent service

use std::time::Duration;

use async_trait::async_trait;
use dockhand_core::config::AgentConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{AgentError, GithubAgent};

/// Client for an MCP-backed GitHub tool agent reachable over HTTP.
///
/// The service wraps an LLM agent wired to the GitHub MCP server; each call
/// hands it one instruction plus the caller's token and a step budget.
pub struct McpAgentClient {
    client: Client,
    base_url: String,
    max_steps: u32,
}

impl McpAgentClient {
    pub fn from_config(config: &AgentConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to build agent HTTP client with custom timeout, using default client");
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_steps: config.max_steps,
        }
    }

    fn run_url(&self) -> String {
        format!("{}/run", self.base_url)
    }
}

#[async_trait]
impl GithubAgent for McpAgentClient {
    async fn run(&self, github_token: &str, instruction: &str) -> Result<String, AgentError> {
        debug!(max_steps = self.max_steps, "Dispatching instruction to agent service");

        let request = AgentRunRequest {
            instruction,
            github_token,
            max_steps: self.max_steps,
        };

        let response = self
            .client
            .post(self.run_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if status.as_u16() >= 500 {
                return Err(AgentError::Unavailable(format!("{}: {}", status, text)));
            }
            return Err(AgentError::Http(format!("{}: {}", status, text)));
        }

        let body: AgentRunResponse = response
            .json()
            .await
            .map_err(|e| AgentError::InvalidResponse(e.to_string()))?;

        Ok(body.output)
    }
}

#[derive(Debug, Serialize)]
struct AgentRunRequest<'a> {
    instruction: &'a str,
    github_token: &'a str,
    max_steps: u32,
}

#[derive(Debug, Deserialize)]
struct AgentRunResponse {
    output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_url_strips_trailing_slash() {
        let client = McpAgentClient::from_config(&AgentConfig {
            base_url: "http://localhost:8765/".to_string(),
            ..AgentConfig::default()
        });
        assert_eq!(client.run_url(), "http://localhost:8765/run");
    }

    #[test]
    fn test_request_serialization() {
        let request = AgentRunRequest {
            instruction: "Get the default branch",
            github_token: "ghp_x",
            max_steps: 20,
        };
        let value = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(value["instruction"], "Get the default branch");
        assert_eq!(value["max_steps"], 20);
    }
}
