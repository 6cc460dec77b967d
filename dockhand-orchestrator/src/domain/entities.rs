//! Task status records
//!
//! Both task kinds follow the same shape: a status enum, a human-readable
//! message, a progress percentage, and a timestamp. Progress values are
//! fixed checkpoints, not measurements; they are monotonically non-decreasing
//! within a task except on failure, where progress resets to 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Phases of a repository analysis task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisTaskStatus {
    Initializing,
    ParsingUrl,
    FetchingRepo,
    LlmAnalysis,
    Completed,
    Failed,
}

/// Status record for an analysis task
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisStatus {
    pub task_id: Uuid,
    pub status: AnalysisTaskStatus,
    pub message: String,
    /// Progress percentage, 0..=100
    pub progress: u8,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisStatus {
    /// Initial record written before the background task starts.
    pub fn initializing(task_id: Uuid) -> Self {
        Self {
            task_id,
            status: AnalysisTaskStatus::Initializing,
            message: "Initializing analyzer...".to_string(),
            progress: 5,
            timestamp: Utc::now(),
        }
    }

    /// Move to the next checkpoint.
    pub fn advanced(
        &self,
        status: AnalysisTaskStatus,
        message: impl Into<String>,
        progress: u8,
    ) -> Self {
        debug_assert!(progress >= self.progress);
        Self {
            task_id: self.task_id,
            status,
            message: message.into(),
            progress,
            timestamp: Utc::now(),
        }
    }

    pub fn completed(&self) -> Self {
        self.advanced(AnalysisTaskStatus::Completed, "Analysis completed", 100)
    }

    pub fn failed(&self, message: impl Into<String>) -> Self {
        Self {
            task_id: self.task_id,
            status: AnalysisTaskStatus::Failed,
            message: message.into(),
            progress: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            AnalysisTaskStatus::Completed | AnalysisTaskStatus::Failed
        )
    }
}

/// Phases of a dockerization task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DockerizationTaskStatus {
    Pending,
    Analyzing,
    CreatingBranch,
    Dockerizing,
    CreatingWorkflow,
    CreatingK8s,
    CreatingPr,
    Completed,
    Failed,
}

/// Status record for a dockerization task
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DockerizationStatus {
    pub task_id: Uuid,
    pub status: DockerizationTaskStatus,
    pub message: String,
    /// Progress percentage, 0..=100
    pub progress: u8,
    /// Set once the pull request has been opened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl DockerizationStatus {
    /// Initial record written when the job is enqueued.
    pub fn queued(task_id: Uuid) -> Self {
        Self {
            task_id,
            status: DockerizationTaskStatus::Pending,
            message: "AI dockerization task queued".to_string(),
            progress: 0,
            pr_url: None,
            timestamp: Utc::now(),
        }
    }

    /// Move to the next checkpoint.
    pub fn advanced(
        &self,
        status: DockerizationTaskStatus,
        message: impl Into<String>,
        progress: u8,
    ) -> Self {
        Self {
            task_id: self.task_id,
            status,
            message: message.into(),
            progress,
            pr_url: self.pr_url.clone(),
            timestamp: Utc::now(),
        }
    }

    pub fn completed(&self, pr_url: impl Into<String>) -> Self {
        Self {
            task_id: self.task_id,
            status: DockerizationTaskStatus::Completed,
            message: "AI dockerization completed successfully!".to_string(),
            progress: 100,
            pr_url: Some(pr_url.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn failed(&self, message: impl Into<String>) -> Self {
        Self {
            task_id: self.task_id,
            status: DockerizationTaskStatus::Failed,
            message: message.into(),
            progress: 0,
            pr_url: None,
            timestamp: Utc::now(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            DockerizationTaskStatus::Completed | DockerizationTaskStatus::Failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_starts_initializing_at_5() {
        let status = AnalysisStatus::initializing(Uuid::new_v4());
        assert_eq!(status.status, AnalysisTaskStatus::Initializing);
        assert_eq!(status.progress, 5);
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_analysis_failure_resets_progress() {
        let status = AnalysisStatus::initializing(Uuid::new_v4())
            .advanced(AnalysisTaskStatus::LlmAnalysis, "Running AI analysis...", 70)
            .failed("boom");
        assert_eq!(status.progress, 0);
        assert_eq!(status.message, "boom");
        assert!(status.is_terminal());
    }

    #[test]
    fn test_dockerization_completion_carries_pr_url() {
        let status = DockerizationStatus::queued(Uuid::new_v4())
            .completed("https://github.com/acme/widgets/pull/42");
        assert_eq!(status.progress, 100);
        assert_eq!(
            status.pr_url.as_deref(),
            Some("https://github.com/acme/widgets/pull/42")
        );
        assert!(status.is_terminal());
    }

    #[test]
    fn test_dockerization_failure_clears_pr_url() {
        let status = DockerizationStatus::queued(Uuid::new_v4())
            .completed("https://github.com/acme/widgets/pull/1")
            .failed("agent unreachable");
        assert_eq!(status.progress, 0);
        assert!(status.pr_url.is_none());
    }

    #[test]
    fn test_status_serialization_uses_snake_case() {
        let value = serde_json::to_value(DockerizationTaskStatus::CreatingK8s)
            .expect("status should serialize");
        assert_eq!(value, serde_json::json!("creating_k8s"));

        let value = serde_json::to_value(AnalysisTaskStatus::LlmAnalysis)
            .expect("status should serialize");
        assert_eq!(value, serde_json::json!("llm_analysis"));
    }
}
