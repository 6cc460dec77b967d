//! Natural-language instructions sent to the agent
//!
//! The instruction wording is part of the product's observable behavior: the
//! agent plans its tool calls from this text.

use crate::domain::RepoRef;

pub const DOCKERFILE_COMMIT_MESSAGE: &str =
    "feat: Add AI-generated multi-stage Dockerfile with production optimization";
pub const COMPOSE_COMMIT_MESSAGE: &str =
    "feat: Add AI-generated docker-compose.yml with integrated services";
pub const WORKFLOW_COMMIT_MESSAGE: &str =
    "feat: Add AI-generated comprehensive GitHub Actions CI/CD workflow";
pub const KUBERNETES_COMMIT_MESSAGE: &str = "feat: Add AI-generated Kubernetes manifests";

/// Fetch the repository layout plus the contents of common configuration
/// files. What exactly comes back is up to the agent.
pub fn fetch_repository_structure(repo: &RepoRef) -> String {
    format!(
        "Get the file structure and contents of the GitHub repository {}. \
         Focus on getting the root directory structure and the contents of important \
         configuration files like package.json, requirements.txt, Cargo.toml, pom.xml, \
         build.gradle, composer.json, go.mod, Pipfile, README.md, README.rst, \
         tsconfig.json, next.config.js, angular.json, vue.config.js, nuxt.config.js.",
        repo.slug()
    )
}

pub fn default_branch_query(repo: &RepoRef) -> String {
    format!(
        "Get the default branch name for the GitHub repository {}",
        repo.slug()
    )
}

pub fn create_branch(repo: &RepoRef, branch: &str, base: &str) -> String {
    format!(
        "Create a new branch named '{}' in the GitHub repository {} based on the '{}' branch",
        branch,
        repo.slug(),
        base
    )
}

pub fn commit_file(
    repo: &RepoRef,
    branch: &str,
    path: &str,
    content: &str,
    commit_message: &str,
) -> String {
    format!(
        "Create or update a file at path '{}' in the GitHub repository {} on branch '{}' \
         with the following content:\n\n{}\n\nUse the commit message: '{}'",
        path,
        repo.slug(),
        branch,
        content,
        commit_message
    )
}

pub fn create_pull_request(
    repo: &RepoRef,
    title: &str,
    head: &str,
    base: &str,
    body: &str,
) -> String {
    format!(
        "Create a pull request in the GitHub repository {} with title '{}' from branch '{}' \
         to '{}' with the following description:\n\n{}",
        repo.slug(),
        title,
        head,
        base,
        body
    )
}
