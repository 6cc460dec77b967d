//! Task domain model

pub mod entities;
pub mod repo;

pub use entities::{
    AnalysisStatus, AnalysisTaskStatus, DockerizationStatus, DockerizationTaskStatus,
};
pub use repo::{InvalidRepoUrl, RepoRef};
