//! GitHub REST API client
//!
//! Pull-request creation goes through the REST API first; the
//! natural-language agent is only a fallback. The token is supplied per call
//! because every request acts on behalf of the submitting user.

use std::time::Duration;

use dockhand_core::config::GithubConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::RepoRef;

/// GitHub REST API error
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("GitHub authentication failed: {0}")]
    Authentication(String),

    #[error("GitHub API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GitHub request failed: {0}")]
    Network(String),
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        GithubError::Network(err.to_string())
    }
}

/// Parameters for opening a pull request
#[derive(Debug, Clone, Serialize)]
pub struct CreatePullRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
}

/// Subset of the pull-request resource Dockhand cares about
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub html_url: String,
    pub number: u64,
}

/// Client for the GitHub REST API
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn from_config(config: &GithubConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to build GitHub HTTP client with custom timeout, using default client");
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn pulls_url(&self, repo: &RepoRef) -> String {
        format!("{}/repos/{}/{}/pulls", self.base_url, repo.owner, repo.repo)
    }

    pub async fn create_pull_request(
        &self,
        token: &str,
        repo: &RepoRef,
        request: &CreatePullRequest,
    ) -> Result<PullRequest, GithubError> {
        debug!(repo = %repo, head = %request.head, base = %request.base, "Creating pull request via REST");

        let response = self
            .client
            .post(self.pulls_url(repo))
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "dockhand")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(GithubError::Authentication(message));
            }
            return Err(GithubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let pull_request: PullRequest = response.json().await.map_err(|e| GithubError::Api {
            status: status.as_u16(),
            message: format!("Unexpected pull request payload: {}", e),
        })?;

        Ok(pull_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulls_url() {
        let client = GitHubClient::from_config(&GithubConfig::default());
        let repo = RepoRef {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
        };
        assert_eq!(
            client.pulls_url(&repo),
            "https://api.github.com/repos/acme/widgets/pulls"
        );
    }

    #[test]
    fn test_create_request_serialization() {
        let request = CreatePullRequest {
            title: "t".to_string(),
            head: "feature/x".to_string(),
            base: "main".to_string(),
            body: "b".to_string(),
        };
        let value = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(value["head"], "feature/x");
        assert_eq!(value["base"], "main");
    }

    #[test]
    fn test_pull_request_deserialization() {
        let raw = serde_json::json!({
            "html_url": "https://github.com/acme/widgets/pull/7",
            "number": 7,
            "state": "open"
        });
        let pr: PullRequest = serde_json::from_value(raw).expect("payload should deserialize");
        assert_eq!(pr.number, 7);
        assert!(pr.html_url.ends_with("/pull/7"));
    }
}
