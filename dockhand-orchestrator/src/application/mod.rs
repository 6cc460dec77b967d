//! Application services and workflows

pub mod analyzer;
pub mod dockerization;

pub use analyzer::AnalysisService;
pub use dockerization::{
    DockerizationError, DockerizationService, DockerizationWorkflow, WorkflowError,
};
