//! Repository coordinates parsed from GitHub URLs

use std::sync::LazyLock;

use regex::Regex;

// Accepts https://github.com/<owner>/<repo>, an optional trailing `.git`,
// and an optional trailing slash. Nothing else.
static REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/]+)/([^/]+?)(?:\.git)?/?$").expect("repo URL pattern is valid")
});

/// Owner/repository pair identifying a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

/// The URL did not match the GitHub repository pattern
#[derive(Debug, thiserror::Error)]
#[error("Invalid GitHub repository URL: {0}")]
pub struct InvalidRepoUrl(pub String);

impl RepoRef {
    pub fn parse(url: &str) -> Result<Self, InvalidRepoUrl> {
        let captures = REPO_URL
            .captures(url.trim())
            .ok_or_else(|| InvalidRepoUrl(url.to_string()))?;

        Ok(Self {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
        })
    }

    /// `owner/repo` form used in instructions and URLs
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
