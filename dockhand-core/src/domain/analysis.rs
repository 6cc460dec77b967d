//! Repository analysis documents
//!
//! These types mirror the JSON schema the model is instructed to produce,
//! plus the identifier and timestamp attached once a document is accepted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// High-level description of the analyzed project
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectOverview {
    /// Project name (usually the repository name)
    pub name: String,
    /// Description derived from the README or inferred by the model
    pub description: String,
    /// Main purpose of the application
    pub purpose: String,
    /// Domain classification, e.g. "Backend/API" or "AI/ML"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Complexity on a 1-10 scale
    pub complexity_score: u8,
}

/// Detected technology stack
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TechnologyStack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    /// Primary programming language
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Detected system architecture
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemArchitecture {
    /// e.g. "Monolithic", "Microservices", "Modular", "Layered"
    pub architecture_type: String,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Combined technical view of the repository
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TechnicalArchitecture {
    pub technology_stack: TechnologyStack,
    pub system_architecture: SystemArchitecture,
}

/// Shape of the model's analysis output, before an identifier and timestamp
/// are attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub project_overview: ProjectOverview,
    pub technical_architecture: TechnicalArchitecture,
}

/// A completed repository analysis.
///
/// Produced once per analysis task and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RepositoryAnalysis {
    pub project_overview: ProjectOverview,
    pub technical_architecture: TechnicalArchitecture,
    pub analysis_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl RepositoryAnalysis {
    /// Accept a model payload, attaching a fresh identifier and timestamp.
    pub fn from_payload(payload: AnalysisPayload) -> Self {
        Self {
            project_overview: payload.project_overview,
            technical_architecture: payload.technical_architecture,
            analysis_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> AnalysisPayload {
        AnalysisPayload {
            project_overview: ProjectOverview {
                name: "widgets".to_string(),
                description: "A widget service".to_string(),
                purpose: "Serve widgets".to_string(),
                domain: Some("Backend/API".to_string()),
                complexity_score: 4,
            },
            technical_architecture: TechnicalArchitecture {
                technology_stack: TechnologyStack {
                    framework: Some("FastAPI".to_string()),
                    language: "Python".to_string(),
                    database: None,
                    runtime: Some("python3.12".to_string()),
                    package_manager: Some("pip".to_string()),
                    dependencies: vec!["fastapi".to_string()],
                },
                system_architecture: SystemArchitecture {
                    architecture_type: "Monolithic".to_string(),
                    modules: vec!["api".to_string()],
                    key_features: vec!["widgets".to_string()],
                    patterns: vec![],
                },
            },
        }
    }

    #[test]
    fn test_from_payload_assigns_id_and_timestamp() {
        let a = RepositoryAnalysis::from_payload(sample_payload());
        let b = RepositoryAnalysis::from_payload(sample_payload());
        assert_ne!(a.analysis_id, b.analysis_id);
        assert_eq!(a.project_overview.name, "widgets");
    }

    #[test]
    fn test_payload_deserializes_without_optional_fields() {
        let raw = serde_json::json!({
            "project_overview": {
                "name": "bare",
                "description": "d",
                "purpose": "p",
                "complexity_score": 1
            },
            "technical_architecture": {
                "technology_stack": { "language": "Rust" },
                "system_architecture": { "architecture_type": "Modular" }
            }
        });

        let payload: AnalysisPayload =
            serde_json::from_value(raw).expect("payload should deserialize");
        assert!(payload.technical_architecture.technology_stack.framework.is_none());
        assert!(payload.technical_architecture.system_architecture.modules.is_empty());
    }
}
