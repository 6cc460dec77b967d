//! Generated artifact content types
//!
//! Each type mirrors the JSON schema a generation prompt demands from the
//! model. Deserialization happens through the tolerant extraction chain in
//! [`crate::infrastructure::response_parser`].

use serde::{Deserialize, Serialize};

/// Generated Dockerfile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerfileContent {
    /// The Dockerfile text
    pub content: String,
    /// Brief description of what was generated
    pub explanation: String,
}

/// Generated docker-compose.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeContent {
    /// The docker-compose.yml text
    pub content: String,
    /// Service names defined in the compose file
    #[serde(default)]
    pub services: Vec<String>,
}

/// Generated GitHub Actions workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowContent {
    /// The workflow YAML text
    pub content: String,
    /// Pipeline features included (e.g. "Testing", "Docker Build")
    #[serde(default)]
    pub features: Vec<String>,
}

/// A single Kubernetes manifest file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Repository path, e.g. `k8s/deployment.yaml`
    pub path: String,
    /// YAML content
    pub content: String,
}

/// Generated Kubernetes manifests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesManifests {
    pub explanation: String,
    #[serde(default)]
    pub items: Vec<ManifestFile>,
}
